//! dogpost library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::review::{PostSummary, RunOptions};
use interface::cli::AppComposition;

pub use domain::policy::{BODY_PREFIX, comment_body};
pub use domain::posted::PostedComments;
pub use domain::review::Comment;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: RunOptions) -> Result<PostSummary> {
    let composition = AppComposition::default();
    composition.post_comments_usecase().execute(options).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
