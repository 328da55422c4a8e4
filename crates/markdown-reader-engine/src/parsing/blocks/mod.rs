//! # Block Parsing
//!
//! Single forward pass over the document's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): the line under the cursor is
//!    classified into a `LineClass` using only its own text
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` turns the class
//!    into a `Block`, letting multi-line constructs (lists, fences) advance
//!    the `LineCursor` past every line they consume
//!
//! ## Modules
//!
//! - **`types`**: the `Block` data model
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for a line
//! - **`builder`**: `BlockBuilder` cursor-driven block construction
//!
//! ## Key Invariants
//!
//! - Parsing is total: anything unrecognized becomes a `Paragraph`
//! - Fenced code blocks are raw zones: interior lines are never classified
//! - Every blank line after the first block yields one `LineBreak`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Block;
