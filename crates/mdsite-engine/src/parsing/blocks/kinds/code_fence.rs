/// Fenced code block type with owned delimiter constant.
///
/// A code block is a raw zone: the opening and closing fence lines are
/// exactly three backticks and everything between them is kept verbatim.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether `line` is a fence line on its own.
    pub fn is_fence(line: &str) -> bool {
        line == Self::FENCE
    }

    /// Returns the verbatim body of a fenced block, or `None` if `content`
    /// does not both open and close with a fence line.
    pub fn body(content: &str) -> Option<String> {
        let lines: Vec<&str> = content.split('\n').collect();
        match lines.as_slice() {
            [open, body @ .., close] if Self::is_fence(open) && Self::is_fence(close) => {
                Some(body.join("\n"))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_between_fences() {
        assert_eq!(
            CodeFence::body("```\nfn main() {}\n```"),
            Some("fn main() {}".to_string())
        );
    }

    #[test]
    fn body_keeps_inner_lines_verbatim() {
        assert_eq!(
            CodeFence::body("```\n# not a heading\n**not bold**\n```"),
            Some("# not a heading\n**not bold**".to_string())
        );
    }

    #[test]
    fn empty_body() {
        assert_eq!(CodeFence::body("```\n```"), Some(String::new()));
    }

    #[test]
    fn single_fence_line_is_not_a_block() {
        assert_eq!(CodeFence::body("```"), None);
    }

    #[test]
    fn info_string_is_not_a_fence() {
        assert!(!CodeFence::is_fence("```rust"));
        assert_eq!(CodeFence::body("```rust\nlet x = 1;\n```"), None);
    }

    #[test]
    fn unterminated_fence() {
        assert_eq!(CodeFence::body("```\ncode"), None);
    }
}
