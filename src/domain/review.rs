//! 리뷰 코멘트 도메인 엔티티/값 객체.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub url: String,
    /// JSON Lines 입력 파일 (없으면 stdin)
    pub input: Option<PathBuf>,
    /// 코멘트에 tool_name이 없을 때 사용할 도구 이름
    pub tool_name: Option<String>,
    pub dry_run: bool,
}

/// 게시 대상 인라인 코멘트.
/// `line`은 diff의 new file 기준 라인 번호다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub path: String,
    pub line: u32,
    pub body: String,
    pub tool_name: String,
}

impl Comment {
    pub fn new(path: &str, line: u32, body: &str) -> Self {
        Self {
            path: path.to_string(),
            line,
            body: body.to_string(),
            tool_name: String::new(),
        }
    }

    pub fn with_tool_name(mut self, tool_name: &str) -> Self {
        self.tool_name = tool_name.to_string();
        self
    }
}

/// 리뷰 서비스에 이미 존재하는 인라인 코멘트.
#[derive(Debug, Clone)]
pub struct ReviewComment {
    pub id: String,
    pub path: String,
    /// outdated 코멘트는 라인이 없을 수 있다.
    pub line: Option<u32>,
    pub body: String,
}

/// 게시 단계 집계 결과.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSummary {
    pub posted: usize,
    pub skipped_duplicate: usize,
    pub skipped_limit: usize,
}
