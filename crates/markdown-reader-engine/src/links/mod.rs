//! # Links
//!
//! Navigation support: raw link extraction with source ranges, and
//! classification of link targets into internal documents and external urls.
//! Resolving an internal target to a path happens here; opening it is the
//! caller's job (see [`crate::io::navigate`]).

pub mod classify;
pub mod extract;

pub use classify::{LinkTarget, classify_link, resolve_link_path};
pub use extract::{ExtractedLink, extract_links};
