//! 콘솔 출력용 Markdown 렌더링 모듈.

use crate::domain::review::{Comment, PostSummary};

/// dry-run에서 게시될 코멘트를 위치 헤더와 함께 보여준다.
pub fn render_preview_markdown(comment: &Comment, body: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- {}:{} ---\n", comment.path, comment.line));
    out.push_str(body);
    out.push('\n');
    out
}

pub fn render_summary_markdown(summary: &PostSummary) -> String {
    let mut out = String::new();
    out.push_str("| Result | Count |\n");
    out.push_str("|---|---:|\n");
    out.push_str(&format!("| posted | {} |\n", summary.posted));
    out.push_str(&format!(
        "| skipped (already posted) | {} |\n",
        summary.skipped_duplicate
    ));
    out.push_str(&format!(
        "| skipped (max_comments) | {} |\n",
        summary.skipped_limit
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_has_location_header() {
        let c = Comment::new("main.go", 10, "hello");
        assert_eq!(
            render_preview_markdown(&c, "BODY"),
            "--- main.go:10 ---\nBODY\n"
        );
    }

    #[test]
    fn summary_lists_counts() {
        let out = render_summary_markdown(&PostSummary {
            posted: 2,
            skipped_duplicate: 1,
            skipped_limit: 0,
        });
        assert!(out.contains("| posted | 2 |"));
        assert!(out.contains("| skipped (already posted) | 1 |"));
        assert!(out.contains("| skipped (max_comments) | 0 |"));
    }
}
