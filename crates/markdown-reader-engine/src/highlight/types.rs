use serde::{Deserialize, Serialize};

use crate::parsing::span::Span;

/// Display category of a highlighted range.
///
/// Variants are listed in claim order: earlier categories win over later
/// ones where their matches meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightCategory {
    String,
    Comment,
    Keyword,
    Number,
    TypeIdentifier,
    Default,
}

/// A range of a code block tagged with exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub span: Span,
    pub category: HighlightCategory,
}

impl HighlightSpan {
    pub fn new(span: Span, category: HighlightCategory) -> Self {
        Self { span, category }
    }
}
