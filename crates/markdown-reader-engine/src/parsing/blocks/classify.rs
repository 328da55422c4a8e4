use super::kinds::{BlockQuote, BulletList, CodeFence, Heading, NumberedList, ThematicBreak};

/// Classification of a single line, in isolation from its neighbours.
///
/// This is phase 1 of block parsing. Variants borrow from the line and are
/// listed in the order they are tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    FenceOpen { language: &'a str },
    Quote { text: &'a str },
    BulletItem { text: &'a str },
    NumberedItem { text: &'a str },
    Text { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a raw line. The line is trimmed first, so indentation never
    /// affects which construct is detected.
    ///
    /// Precedence: blank, heading, rule, fence, quote, bullet, numbered,
    /// then plain text.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let line = raw.trim();

        if line.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some(language) = CodeFence::open(line) {
            return LineClass::FenceOpen { language };
        }
        if let Some(text) = BlockQuote::parse(line) {
            return LineClass::Quote { text };
        }
        if let Some(text) = BulletList::item(line) {
            return LineClass::BulletItem { text };
        }
        if let Some(text) = NumberedList::item(line) {
            return LineClass::NumberedItem { text };
        }
        LineClass::Text { text: line }
    }
}
