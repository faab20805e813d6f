//! PR 인라인 코멘트 게시의 전체 오케스트레이션 유스케이스.

mod context;
mod dedupe;
mod publish;

use anyhow::Result;

use crate::application::ports::{
    CommentSource, ConfigRepository, HostTokenResolver, MarkdownRenderer, Reporter,
    TargetResolver, VcsFactory,
};
use crate::domain::review::{PostSummary, RunOptions};

use context::load_execution_context;
use dedupe::load_posted_comments;
use publish::publish_comments;

/// 입력 코멘트 읽기부터 중복 검사, 인라인 코멘트 게시까지 전체 흐름을 조율한다.
pub struct PostCommentsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub host_token_resolver: &'a dyn HostTokenResolver,
    pub target_resolver: &'a dyn TargetResolver,
    pub vcs_factory: &'a dyn VcsFactory,
    pub comment_source: &'a dyn CommentSource,
    pub renderer: &'a dyn MarkdownRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PostCommentsUseCase<'a> {
    /// 게시 본 실행 진입점.
    /// dry-run이면 게시 대신 최종 본문을 출력한다.
    pub async fn execute(&self, options: RunOptions) -> Result<PostSummary> {
        self.reporter.section("Session");
        self.reporter.kv("Target", &options.url);
        self.reporter.kv(
            "Mode",
            if options.dry_run {
                "dry-run"
            } else {
                "post-comment"
            },
        );

        let mut ctx = load_execution_context(self, &options).await?;
        tracing::info!(
            target_url = ctx.target.url(),
            head_sha = %ctx.head_sha,
            comments = ctx.comments.len(),
            "execution context ready"
        );

        load_posted_comments(self, &mut ctx);
        publish_comments(self, &options, &mut ctx).await
    }
}
