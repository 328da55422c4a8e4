/// Backtick code fence with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the trimmed line opens a fence, returns the declared language
    /// (possibly empty).
    pub fn open(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Whether a raw interior line closes the fence. Text after the
    /// backticks is ignored.
    pub fn closes(raw: &str) -> bool {
        raw.trim().starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_with_language() {
        assert_eq!(CodeFence::open("```swift"), Some("swift"));
        assert_eq!(CodeFence::open("```  go  "), Some("go"));
    }

    #[test]
    fn opener_without_language() {
        assert_eq!(CodeFence::open("```"), Some(""));
    }

    #[test]
    fn not_a_fence() {
        assert_eq!(CodeFence::open("``inline``"), None);
        assert_eq!(CodeFence::open("hello"), None);
    }

    #[test]
    fn closing_fence_allows_indent_and_trailing_text() {
        assert!(CodeFence::closes("```"));
        assert!(CodeFence::closes("   ```"));
        assert!(CodeFence::closes("```trailing"));
        assert!(!CodeFence::closes("let x = 1"));
    }
}
