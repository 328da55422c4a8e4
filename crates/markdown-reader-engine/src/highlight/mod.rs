//! # Source Highlighting
//!
//! Assigns one display category to every byte of a code block.
//!
//! Categories claim positions in strict precedence: string literals, then
//! comments, then keywords, numbers and type identifiers. Keyword, number
//! and type matches that start inside a string or comment are skipped.
//!
//! Only one language is highlighted (Swift by default, see
//! [`Highlighter::with_languages`] for aliases). Any other language yields a
//! single `Default` span.

pub mod highlighter;
pub mod language;
pub mod types;

pub use highlighter::Highlighter;
pub use types::{HighlightCategory, HighlightSpan};

/// Highlights `code` with the default [`Highlighter`].
pub fn highlight(code: &str, language: &str) -> Vec<HighlightSpan> {
    Highlighter::new().highlight(code, language)
}
