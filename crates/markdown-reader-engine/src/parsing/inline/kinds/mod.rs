//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = b'`' ``, single backticks, non-empty content
//! - **`Link`**: `[text](url)`, both parts non-empty
//! - **`Strong`**: `**text**`, no `*` or newline inside
//! - **`Emphasis`**: `*text*`, never adjacent to another `*`
//!
//! The scanners in `parser` use these constants; they never hardcode the
//! delimiter bytes.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
