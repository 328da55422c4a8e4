use std::path::{Path, PathBuf};

use relative_path::RelativePath;
use serde::{Deserialize, Serialize};

/// Extension that marks a link as pointing at another document.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Prefix of links that are opened in a browser.
pub const WEB_PREFIX: &str = "http";

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Another markdown document, addressed by path relative to the current
    /// file (or absolute).
    Internal(String),
    External(String),
}

impl LinkTarget {
    pub fn url(&self) -> &str {
        match self {
            LinkTarget::Internal(u) | LinkTarget::External(u) => u,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, LinkTarget::Internal(_))
    }

    /// External links that a browser would open. Other external targets
    /// (anchors, images, mail) are left alone by navigation.
    pub fn is_web(&self) -> bool {
        matches!(self, LinkTarget::External(u) if u.starts_with(WEB_PREFIX))
    }
}

/// Classifies a link url.
///
/// Internal if it ends with `.md` and does not start with `http`;
/// everything else is external. Both checks are case-sensitive.
pub fn classify_link(url: &str) -> LinkTarget {
    if url.ends_with(DOCUMENT_EXTENSION) && !url.starts_with(WEB_PREFIX) {
        LinkTarget::Internal(url.to_string())
    } else {
        LinkTarget::External(url.to_string())
    }
}

/// Resolves an internal link against the file that contains it.
///
/// Absolute links (leading `/`) are used as-is. Relative links are joined
/// to the current file's directory with `.` and `..` collapsed.
pub fn resolve_link_path(link: &str, current_file: &Path) -> PathBuf {
    if link.starts_with('/') {
        return PathBuf::from(link);
    }
    let base = current_file.parent().unwrap_or_else(|| Path::new(""));
    RelativePath::new(link).to_logical_path(base)
}
