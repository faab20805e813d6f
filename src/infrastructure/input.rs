//! JSON Lines 형식의 코멘트 입력 파서.
//!
//! 한 줄에 하나씩 `{"path": "...", "line": 10, "body": "...", "tool_name": "..."}`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::review::Comment;

#[derive(Debug, Deserialize)]
struct CommentLine {
    path: String,
    line: u32,
    body: String,
    #[serde(default)]
    tool_name: Option<String>,
}

impl From<CommentLine> for Comment {
    fn from(c: CommentLine) -> Self {
        Comment {
            path: c.path,
            line: c.line,
            body: c.body,
            tool_name: c.tool_name.unwrap_or_default(),
        }
    }
}

/// 파일 경로가 없으면 stdin 전체를 읽어 파싱한다.
pub fn read_comments(input: Option<&Path>) -> Result<Vec<Comment>> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read comments from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read comments from stdin")?;
            buf
        }
    };
    parse_comments(&raw)
}

/// 빈 줄은 건너뛰고, 잘못된 줄은 1부터 시작하는 줄 번호와 함께 실패한다.
pub fn parse_comments(raw: &str) -> Result<Vec<Comment>> {
    let mut comments = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed: CommentLine = serde_json::from_str(line)
            .with_context(|| format!("invalid comment JSON at line {}", idx + 1))?;
        comments.push(parsed.into());
    }
    Ok(comments)
}
