pub mod highlight;
pub mod io;
pub mod links;
pub mod parsing;

// Re-export key types for easier usage
pub use highlight::{HighlightCategory, HighlightSpan, Highlighter, highlight};
pub use io::{IoError, navigate, read_file};
pub use links::{ExtractedLink, LinkTarget, classify_link, extract_links, resolve_link_path};
pub use parsing::blocks::Block;
pub use parsing::inline::{InlineSpan, LocatedSpan, resolve_located_spans, resolve_spans};
pub use parsing::span::Span;
pub use parsing::{inline_spans_for_block, parse_blocks};
