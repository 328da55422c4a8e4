use std::sync::OnceLock;

use regex::Regex;

/// Bullet list item markers. Markers may be mixed within one list.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [&'static str; 3] = ["- ", "* ", "+ "];

    /// Returns the item text if the trimmed line is a bullet item.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|m| line.strip_prefix(m))
            .map(str::trim)
    }
}

/// Numbered list items: digits, a dot, then whitespace.
pub struct NumberedList;

impl NumberedList {
    fn marker() -> &'static Regex {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        MARKER.get_or_init(|| Regex::new(r"^\d+\.\s+").expect("Invalid numbered list regex"))
    }

    /// Returns the item text with the number, dot and following whitespace
    /// removed, if the trimmed line is a numbered item.
    pub fn item(line: &str) -> Option<&str> {
        Self::marker().find(line).map(|m| &line[m.end()..])
    }
}
