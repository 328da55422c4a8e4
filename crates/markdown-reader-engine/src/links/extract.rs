use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::parsing::{
    inline::parser::{MatchKind, scan},
    span::Span,
};

/// A `[text](url)` occurrence found for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLink {
    pub text: String,
    pub url: String,
    /// Byte range of the whole link, brackets included.
    pub span: Span,
    /// The same range in UTF-16 code units, for collaborators that index
    /// text that way.
    pub utf16: Range<usize>,
}

/// Finds every link in `text`, in source order.
///
/// Uses the same link grammar as inline span resolution, but ignores every
/// other construct: a link inside a code span is still reported.
pub fn extract_links(text: &str) -> Vec<ExtractedLink> {
    let mut units = Utf16Counter::new(text);

    scan(text, MatchKind::Link)
        .into_iter()
        .filter_map(|m| {
            let url = m.url?;
            let start = units.advance_to(m.full.start);
            let end = units.advance_to(m.full.end);
            Some(ExtractedLink {
                text: text[m.inner.range()].to_string(),
                url: text[url.range()].to_string(),
                span: m.full,
                utf16: start..end,
            })
        })
        .collect()
}

/// Converts increasing byte offsets to UTF-16 offsets in one pass.
struct Utf16Counter<'a> {
    text: &'a str,
    byte: usize,
    unit: usize,
}

impl<'a> Utf16Counter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            unit: 0,
        }
    }

    /// `offset` must not be smaller than the previous call's.
    fn advance_to(&mut self, offset: usize) -> usize {
        self.unit += self.text[self.byte..offset].encode_utf16().count();
        self.byte = offset;
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_links_in_order() {
        let links = extract_links("See [one](a.md) and [two](https://x.io).");
        assert_eq!(
            links,
            vec![
                ExtractedLink {
                    text: "one".into(),
                    url: "a.md".into(),
                    span: Span::new(4, 15),
                    utf16: 4..15,
                },
                ExtractedLink {
                    text: "two".into(),
                    url: "https://x.io".into(),
                    span: Span::new(20, 39),
                    utf16: 20..39,
                },
            ]
        );
    }

    #[test]
    fn utf16_offsets_differ_from_bytes() {
        // "é" is 2 bytes / 1 unit, "😀" is 4 bytes / 2 units.
        let links = extract_links("é😀 [t](u)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].span, Span::new(7, 13));
        assert_eq!(links[0].utf16, 4..10);
    }

    #[test]
    fn links_inside_code_are_still_found() {
        let links = extract_links("`[t](u.md)`");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "u.md");
    }

    #[test]
    fn spans_slice_back_to_source() {
        let text = "x [a](b) y [c](d)";
        for link in extract_links(text) {
            assert_eq!(
                &text[link.span.range()],
                format!("[{}]({})", link.text, link.url)
            );
        }
    }

    #[test]
    fn no_links() {
        assert!(extract_links("plain [brackets] and (parens)").is_empty());
    }
}
