/// Horizontal rule. Recognized by prefix only: anything after the
/// three-symbol run is ignored.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const PREFIXES: [&'static str; 3] = ["---", "***", "___"];

    pub fn matches(line: &str) -> bool {
        Self::PREFIXES.iter().any(|p| line.starts_with(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_rules() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("***"));
        assert!(ThematicBreak::matches("___"));
    }

    #[test]
    fn trailing_text_still_a_rule() {
        assert!(ThematicBreak::matches("--- not a paragraph"));
        assert!(ThematicBreak::matches("*****"));
    }

    #[test]
    fn short_runs_are_not_rules() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("- - -"));
        assert!(!ThematicBreak::matches("**bold**"));
    }
}
