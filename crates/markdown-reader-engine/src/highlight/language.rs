//! Keyword table for the one language with highlighting support.

/// Canonical name of the highlighted language.
pub const SWIFT: &str = "swift";

/// Reserved words highlighted as keywords.
pub const SWIFT_KEYWORDS: &[&str] = &[
    "import", "class", "struct", "enum", "protocol", "extension", "func", "var", "let", "if",
    "else", "for", "while", "switch", "case", "default", "return", "break", "continue", "public",
    "private", "internal", "fileprivate", "open", "static", "final", "override", "init", "deinit",
    "self", "super", "nil", "true", "false", "weak", "strong", "unowned", "mutating",
    "nonmutating", "lazy", "required", "optional", "throws", "rethrows", "try", "catch", "defer",
    "guard", "where", "as", "is", "in", "inout",
];

/// Attributes highlighted as keywords. Matched starting at the `@`.
pub const SWIFT_ATTRIBUTES: &[&str] = &["objc", "main"];

/// Builds the keyword pattern: whole words, or `@attribute` followed by a
/// word boundary.
pub fn keyword_pattern() -> String {
    format!(
        r"\b(?:{})\b|@(?:{})\b",
        SWIFT_KEYWORDS.join("|"),
        SWIFT_ATTRIBUTES.join("|")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn keyword_pattern_compiles_and_matches_whole_words() {
        let re = Regex::new(&keyword_pattern()).unwrap();
        let found: Vec<_> = re
            .find_iter("let inout = lettuce in @objc")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["let", "inout", "in", "@objc"]);
    }
}
