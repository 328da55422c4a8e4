//! # Inline Span Resolution
//!
//! Cursor-based scanning of a single line into typed spans.
//!
//! ## Architecture
//!
//! Inline resolution is separate from block parsing and runs lazily over
//! the text of one block (paragraph, heading, quote, list item) at render
//! time.
//!
//! Four scanners run independently over the full line: code spans, links,
//! bold and italic. Their matches are merged, sorted by start offset and
//! walked left to right; gaps become plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum and `LocatedSpan`
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `resolve_spans()` entry point with `try_parse_*` helpers
//!
//! ## Overlaps
//!
//! When matches of different kinds overlap, the one starting first wins and
//! the later one is dropped: `` `**x**` `` is a single code span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{resolve_located_spans, resolve_spans};
pub use types::{InlineSpan, LocatedSpan};
