//! 도메인 정책(코멘트 본문 포맷, 기존 코멘트 기반 중복 방지 규칙).

use crate::domain::posted::PostedComments;
use crate::domain::review::{Comment, ReviewComment};

/// 모든 코멘트 본문에 들어가는 출처 표기.
pub const BODY_PREFIX: &str =
    "<sub>reported by [reviewdog](https://github.com/reviewdog/reviewdog) :dog:</sub>";

/// 게시할 최종 코멘트 본문을 만든다.
pub fn comment_body(comment: &Comment) -> String {
    let mut out = String::new();
    if !comment.tool_name.is_empty() {
        out.push_str(&format!("**[{}]** ", comment.tool_name));
    }
    out.push_str(BODY_PREFIX);
    out.push('\n');
    out.push_str(&comment.body);
    out
}

/// 리뷰 서비스의 기존 코멘트로 레지스트리를 채운다.
/// 라인이 없는(outdated) 코멘트는 건너뛴다.
pub fn posted_from_existing(existing: &[ReviewComment]) -> PostedComments {
    let mut posted = PostedComments::new();
    for c in existing {
        if let Some(line) = c.line {
            posted.add_posted_comment(&c.path, line, &c.body);
        }
    }
    posted
}

/// 코멘트에 도구 이름이 없으면 기본값을 채운다.
pub fn apply_default_tool_name(comments: &mut [Comment], default_tool: Option<&str>) {
    let Some(tool) = default_tool.map(str::trim).filter(|t| !t.is_empty()) else {
        return;
    };
    for c in comments.iter_mut().filter(|c| c.tool_name.is_empty()) {
        c.tool_name = tool.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_without_tool_name() {
        let body = comment_body(&Comment::new("main.go", 1, "fix this"));
        assert_eq!(
            body,
            "<sub>reported by [reviewdog](https://github.com/reviewdog/reviewdog) :dog:</sub>\nfix this"
        );
        assert!(!body.contains("**["));
    }

    #[test]
    fn body_with_tool_name() {
        let body = comment_body(&Comment::new("main.go", 1, "exported func").with_tool_name("golint"));
        assert!(body.starts_with("**[golint]** <sub>reported by"));
        assert!(body.ends_with("\nexported func"));
    }

    #[test]
    fn empty_body_keeps_prefix() {
        let body = comment_body(&Comment::new("main.go", 1, ""));
        assert_eq!(body, format!("{BODY_PREFIX}\n"));
    }

    #[test]
    fn existing_comments_fill_registry() {
        let c = Comment::new("src/lib.rs", 4, "needless borrow").with_tool_name("clippy");
        let existing = vec![
            ReviewComment {
                id: "1".to_string(),
                path: "src/lib.rs".to_string(),
                line: Some(4),
                body: comment_body(&c),
            },
            ReviewComment {
                id: "2".to_string(),
                path: "src/old.rs".to_string(),
                line: None,
                body: "outdated".to_string(),
            },
        ];

        let posted = posted_from_existing(&existing);
        assert!(posted.is_posted(&c, 4));
        assert_eq!(posted.len(), 1);
    }

    #[test]
    fn default_tool_name_only_fills_empty() {
        let mut comments = vec![
            Comment::new("a.go", 1, "x"),
            Comment::new("a.go", 2, "y").with_tool_name("vet"),
        ];
        apply_default_tool_name(&mut comments, Some("golint"));

        assert_eq!(comments[0].tool_name, "golint");
        assert_eq!(comments[1].tool_name, "vet");
    }

    #[test]
    fn blank_default_tool_name_is_ignored() {
        let mut comments = vec![Comment::new("a.go", 1, "x")];
        apply_default_tool_name(&mut comments, Some("  "));
        assert!(comments[0].tool_name.is_empty());
    }
}
