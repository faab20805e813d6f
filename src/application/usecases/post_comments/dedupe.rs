//! 기존 인라인 코멘트 기반 중복 방지 단계.

use crate::application::usecases::post_comments::{PostCommentsUseCase, context::ExecutionContext};
use crate::domain::policy::posted_from_existing;

/// 리뷰 서비스에 이미 있는 코멘트로 게시 레지스트리를 채운다.
pub(super) fn load_posted_comments(use_case: &PostCommentsUseCase<'_>, ctx: &mut ExecutionContext) {
    ctx.posted = posted_from_existing(&ctx.existing_comments);
    ctx.posted.debug_log();

    use_case.reporter.status(
        "Dedup",
        &format!(
            "{} existing review comment(s) registered",
            ctx.posted.len()
        ),
    );
}
