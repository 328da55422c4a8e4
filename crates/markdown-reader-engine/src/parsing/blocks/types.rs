use serde::{Deserialize, Serialize};

/// A top-level structural unit of a parsed document.
///
/// Blocks are produced in document order. Inline formatting inside text
/// fields is left unresolved; callers run the inline resolver per block when
/// they render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `#` to `####` heading.
    Heading {
        /// 1 to 4.
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// A fenced code block. Interior lines are kept verbatim.
    CodeBlock {
        code: String,
        /// Text after the opening fence, trimmed. May be empty.
        language: String,
    },
    BulletList {
        items: Vec<String>,
    },
    NumberedList {
        items: Vec<String>,
    },
    Blockquote {
        text: String,
    },
    HorizontalRule,
    /// Vertical spacing for one blank line. Consecutive blank lines each
    /// produce their own break.
    LineBreak,
}

impl Block {
    /// Texts that go through inline span resolution, in display order.
    ///
    /// Lists yield one text per item. Code blocks are raw zones and yield
    /// nothing, as do rules and breaks.
    pub fn inline_texts(&self) -> Vec<&str> {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::Blockquote { text } => {
                vec![text.as_str()]
            }
            Block::BulletList { items } | Block::NumberedList { items } => {
                items.iter().map(String::as_str).collect()
            }
            Block::CodeBlock { .. } | Block::HorizontalRule | Block::LineBreak => vec![],
        }
    }
}
