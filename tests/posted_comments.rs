use dogpost::{BODY_PREFIX, Comment, PostedComments, comment_body};

#[test]
fn stored_formatted_body_is_found_again() {
    let c = Comment::new("main.go", 10, "hello");
    let mut posted = PostedComments::new();

    assert!(!posted.is_posted(&c, 10));
    posted.add_posted_comment("main.go", 10, &comment_body(&c));
    assert!(posted.is_posted(&c, 10));
    assert!(!posted.is_posted(&Comment::new("other.go", 5, "x"), 5));
}

#[test]
fn attribution_is_always_present() {
    for tool in ["", "golint", "eslint"] {
        let body = comment_body(&Comment::new("a.js", 1, "msg").with_tool_name(tool));
        assert!(body.contains(BODY_PREFIX));
        assert_eq!(body.contains("**["), !tool.is_empty());
    }
}

#[test]
fn debug_output_counts_positions_not_bodies() {
    let mut posted = PostedComments::new();
    for body in ["a", "b", "c"] {
        posted.add_posted_comment("x.rs", 1, body);
    }
    posted.add_posted_comment("x.rs", 2, "a");

    assert_eq!(posted.len(), 4);
    assert_eq!(posted.debug_lines().len(), 2);
    posted.debug_log();
}
