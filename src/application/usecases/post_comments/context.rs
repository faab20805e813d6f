//! 게시 실행 컨텍스트(설정/대상/입력 코멘트/VCS 상태) 준비 단계.

use anyhow::{Context, Result, bail};

use crate::application::config::Config;
use crate::application::ports::VcsGateway;
use crate::application::usecases::post_comments::PostCommentsUseCase;
use crate::domain::policy::apply_default_tool_name;
use crate::domain::posted::PostedComments;
use crate::domain::review::{Comment, ReviewComment, RunOptions};
use crate::domain::target::ReviewTarget;

/// 게시 유스케이스 전 구간에서 공유되는 실행 상태.
pub(super) struct ExecutionContext {
    pub config: Config,
    pub target: ReviewTarget,
    pub vcs: Box<dyn VcsGateway>,
    pub head_sha: String,
    pub comments: Vec<Comment>,
    pub existing_comments: Vec<ReviewComment>,
    pub posted: PostedComments,
}

/// 설정 로딩, 대상 파싱, 입력 코멘트 읽기, VCS 토큰/HEAD SHA 조회까지 선행한다.
pub(super) async fn load_execution_context(
    use_case: &PostCommentsUseCase<'_>,
    options: &RunOptions,
) -> Result<ExecutionContext> {
    use_case.reporter.section("Load Config");
    let config = use_case
        .config_repo
        .load()
        .context("failed to load dogpost config")?;

    let target = use_case
        .target_resolver
        .parse(&options.url)
        .context("failed to parse target URL")?;

    let host_cfg = config.host_config(target.host());
    let token_resolution = use_case
        .host_token_resolver
        .resolve(target.host(), host_cfg)?;
    if let Some(source) = &token_resolution.source {
        use_case.reporter.kv("Token", source);
    }
    let token = token_resolution.token;

    if !options.dry_run && token.is_none() {
        bail!(
            "missing VCS token for host '{}'. Configure hosts.{}.token, token_env or token_command in config, or use --dry-run",
            target.host(),
            target.host(),
        );
    }

    use_case.reporter.section("Read Comments");
    let mut comments = use_case
        .comment_source
        .read(options.input.as_deref())
        .context("failed to read comments")?;
    let default_tool = options.tool_name.as_deref().or(config.tool_name());
    apply_default_tool_name(&mut comments, default_tool);
    use_case
        .reporter
        .kv("Comments", &comments.len().to_string());

    let has_token = token.is_some();
    let vcs = use_case.vcs_factory.build(&target, host_cfg, token);

    use_case.reporter.section("Fetch Target");
    use_case.reporter.kv("Host", target.host());
    use_case.reporter.status("VCS", "fetching head SHA");
    let head_sha = vcs.fetch_head_sha().await?;
    use_case.reporter.kv("Head SHA", &head_sha);

    // 토큰 없는 dry-run은 기존 코멘트 조회를 생략한다.
    let existing_comments = if has_token {
        use_case.reporter.status("VCS", "listing review comments");
        vcs.list_review_comments().await?
    } else {
        Vec::new()
    };

    Ok(ExecutionContext {
        config,
        target,
        vcs,
        head_sha,
        comments,
        existing_comments,
        posted: PostedComments::new(),
    })
}
