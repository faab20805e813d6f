//! 이미 게시된 코멘트 레지스트리.
//! `path` -> `line`(new file 기준) -> 게시된 코멘트 본문 목록.

use std::collections::HashMap;

use crate::domain::policy::comment_body;
use crate::domain::review::Comment;

/// 한 번의 실행 동안 리뷰 서비스에 게시된 코멘트를 추적한다.
/// 본문은 `comment_body`로 포맷된 최종 텍스트를 저장해야 조회와 일치한다.
#[derive(Debug, Clone, Default)]
pub struct PostedComments {
    inner: HashMap<String, HashMap<u32, Vec<String>>>,
}

impl PostedComments {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 path, 같은 line, 같은 (포맷된) 본문이면 이미 게시된 코멘트로 본다.
    pub fn is_posted(&self, comment: &Comment, line: u32) -> bool {
        let Some(lines) = self.inner.get(&comment.path) else {
            return false;
        };
        let Some(bodies) = lines.get(&line) else {
            return false;
        };

        let body = comment_body(comment);
        bodies.iter().any(|posted| *posted == body)
    }

    /// 게시된 코멘트를 추가한다. 중복 여부는 검사하지 않는다.
    pub fn add_posted_comment(&mut self, path: &str, line: u32, body: &str) {
        self.inner
            .entry(path.to_string())
            .or_default()
            .entry(line)
            .or_default()
            .push(body.to_string());
    }

    pub fn bodies(&self, path: &str, line: u32) -> &[String] {
        self.inner
            .get(path)
            .and_then(|lines| lines.get(&line))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 저장된 본문 개수(중복 포함).
    pub fn len(&self) -> usize {
        self.inner
            .values()
            .flat_map(|lines| lines.values())
            .map(Vec::len)
            .sum()
    }

    /// (path, line) 쌍마다 한 줄씩, path/line 순으로 정렬한 진단 문자열.
    pub fn debug_lines(&self) -> Vec<String> {
        let mut pairs: Vec<(&str, u32)> = self
            .inner
            .iter()
            .flat_map(|(path, lines)| lines.keys().map(move |line| (path.as_str(), *line)))
            .collect();
        pairs.sort_unstable();

        pairs
            .into_iter()
            .map(|(path, line)| format!("posted: {path}:{line}"))
            .collect()
    }

    /// 디버깅용으로 게시된 코멘트 위치를 로그로 남긴다.
    pub fn debug_log(&self) {
        for line in self.debug_lines() {
            tracing::debug!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_path_is_not_posted() {
        let posted = PostedComments::new();
        assert!(!posted.is_posted(&Comment::new("other.go", 5, "x"), 5));
    }

    #[test]
    fn unknown_line_is_not_posted() {
        let c = Comment::new("main.go", 10, "hello");
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 10, &comment_body(&c));

        assert!(!posted.is_posted(&c, 11));
    }

    #[test]
    fn formatted_body_is_posted() {
        let c = Comment::new("main.go", 10, "hello").with_tool_name("golint");
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 10, &comment_body(&c));

        assert!(posted.is_posted(&c, 10));
    }

    #[test]
    fn raw_body_does_not_match() {
        let c = Comment::new("main.go", 10, "hello");
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 10, "hello");

        assert!(!posted.is_posted(&c, 10));
    }

    #[test]
    fn whitespace_difference_is_not_posted() {
        let c = Comment::new("main.go", 10, "hello");
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 10, &format!("{} ", comment_body(&c)));

        assert!(!posted.is_posted(&c, 10));
    }

    #[test]
    fn tool_name_is_part_of_identity() {
        let plain = Comment::new("main.go", 3, "unused variable");
        let tagged = plain.clone().with_tool_name("vet");
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 3, &comment_body(&plain));

        assert!(posted.is_posted(&plain, 3));
        assert!(!posted.is_posted(&tagged, 3));
    }

    #[test]
    fn duplicate_add_is_stored_twice() {
        let c = Comment::new("main.go", 10, "hello");
        let body = comment_body(&c);
        let mut posted = PostedComments::new();
        posted.add_posted_comment("main.go", 10, &body);
        posted.add_posted_comment("main.go", 10, &body);

        assert_eq!(posted.bodies("main.go", 10).len(), 2);
        assert_eq!(posted.len(), 2);
        assert!(posted.is_posted(&c, 10));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut posted = PostedComments::new();
        posted.add_posted_comment("a.rs", 1, "first");
        posted.add_posted_comment("a.rs", 1, "second");

        assert_eq!(posted.bodies("a.rs", 1), ["first", "second"]);
        assert!(posted.bodies("a.rs", 2).is_empty());
        assert!(posted.bodies("b.rs", 1).is_empty());
    }

    #[test]
    fn debug_lines_empty_registry() {
        let posted = PostedComments::new();
        assert!(posted.is_empty());
        assert!(posted.debug_lines().is_empty());
    }

    #[test]
    fn debug_lines_one_per_position() {
        let mut posted = PostedComments::new();
        posted.add_posted_comment("b.go", 2, "x");
        posted.add_posted_comment("b.go", 2, "y");
        posted.add_posted_comment("a.go", 7, "z");
        posted.add_posted_comment("b.go", 1, "w");

        assert_eq!(
            posted.debug_lines(),
            vec!["posted: a.go:7", "posted: b.go:1", "posted: b.go:2"]
        );
    }
}
