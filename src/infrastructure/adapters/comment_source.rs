//! 코멘트 입력 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::CommentSource;
use crate::domain::review::Comment;
use crate::infrastructure::input;

/// JSON Lines 파일/stdin에서 코멘트를 읽는 어댑터.
pub struct JsonLinesCommentSource;

impl CommentSource for JsonLinesCommentSource {
    fn read(&self, input: Option<&Path>) -> Result<Vec<Comment>> {
        input::read_comments(input)
    }
}
