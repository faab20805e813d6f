//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 상태 스코프에 색을 입힌다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        let scope = format!("{:<12}", scope);
        if self.interactive {
            println!("[{}] {}", colorize_scope(&scope), message);
        } else {
            println!("[{}] {}", scope, message);
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

fn colorize_scope(scope: &str) -> String {
    match scope.trim_end() {
        "Post" => format!("\x1b[32m{scope}\x1b[0m"),
        "Skip" => format!("\x1b[33m{scope}\x1b[0m"),
        _ => scope.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_known_scopes_only() {
        assert_eq!(colorize_scope("Post        "), "\x1b[32mPost        \x1b[0m");
        assert_eq!(colorize_scope("Skip"), "\x1b[33mSkip\x1b[0m");
        assert_eq!(colorize_scope("VCS"), "VCS");
    }
}
