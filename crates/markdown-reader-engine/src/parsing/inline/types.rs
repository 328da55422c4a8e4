use serde::{Deserialize, Serialize};

use crate::parsing::span::Span;

/// A typed fragment of one line of text carrying a single formatting
/// treatment. Delimiters are stripped; only visible text is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    PlainText(String),
    Bold(String),
    Italic(String),
    InlineCode(String),
    Link { text: String, url: String },
}

impl InlineSpan {
    /// The text a reader sees for this span.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineSpan::PlainText(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::InlineCode(t)
            | InlineSpan::Link { text: t, .. } => t,
        }
    }
}

/// An [`InlineSpan`] together with the source range it was produced from,
/// delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedSpan {
    pub span: Span,
    pub inline: InlineSpan,
}
