//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier
//! asks these types whether a line opens their construct; it never hardcodes
//! `#`, `>` or fence markers itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{BulletList, NumberedList};
pub use thematic_break::ThematicBreak;
