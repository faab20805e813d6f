//! 마크다운 렌더링 포트 구현 어댑터.

use crate::application::ports::MarkdownRenderer;
use crate::domain::review::{Comment, PostSummary};
use crate::infrastructure::render;

/// 마크다운 렌더링 어댑터.
pub struct MarkdownRendererAdapter;

impl MarkdownRenderer for MarkdownRendererAdapter {
    fn render_preview(&self, comment: &Comment, body: &str) -> String {
        render::render_preview_markdown(comment, body)
    }

    fn render_summary(&self, summary: &PostSummary) -> String {
        render::render_summary_markdown(summary)
    }
}
