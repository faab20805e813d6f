//! 인라인 코멘트 렌더링 및 게시 단계.

use anyhow::{Context, Result};

use crate::application::usecases::post_comments::{PostCommentsUseCase, context::ExecutionContext};
use crate::domain::policy::comment_body;
use crate::domain::review::{PostSummary, RunOptions};

/// 새 코멘트만 출력(dry-run) 또는 게시한다.
/// 게시한 본문은 레지스트리에 다시 등록해 같은 입력 안의 중복도 건너뛴다.
pub(super) async fn publish_comments(
    use_case: &PostCommentsUseCase<'_>,
    options: &RunOptions,
    ctx: &mut ExecutionContext,
) -> Result<PostSummary> {
    let mut summary = PostSummary::default();
    let limit = ctx.config.max_comments();

    if options.dry_run {
        use_case.reporter.section("Dry Run: Review Comments");
    } else {
        use_case.reporter.section("Post Review Comments");
    }

    let comments = std::mem::take(&mut ctx.comments);
    for comment in &comments {
        let location = format!("{}:{}", comment.path, comment.line);

        if ctx.posted.is_posted(comment, comment.line) {
            tracing::debug!(%location, "skip already posted comment");
            use_case.reporter.status("Skip", &format!("{location} already posted"));
            summary.skipped_duplicate += 1;
            continue;
        }

        if limit.is_some_and(|max| summary.posted >= max) {
            summary.skipped_limit += 1;
            continue;
        }

        let body = comment_body(comment);
        if options.dry_run {
            use_case
                .reporter
                .raw(&use_case.renderer.render_preview(comment, &body));
        } else {
            ctx.vcs
                .create_review_comment(&ctx.head_sha, &comment.path, comment.line, &body)
                .await
                .with_context(|| format!("failed to post comment at {location}"))?;
            use_case.reporter.status("Post", &location);
        }

        ctx.posted.add_posted_comment(&comment.path, comment.line, &body);
        summary.posted += 1;
    }

    if summary.skipped_limit > 0 {
        tracing::warn!(
            skipped = summary.skipped_limit,
            "max_comments reached; remaining comments were not posted"
        );
    }

    use_case.reporter.section("Done");
    use_case
        .reporter
        .raw(&use_case.renderer.render_summary(&summary));
    Ok(summary)
}
