//! File access on behalf of the core. The parsers themselves never touch
//! the filesystem; this is the reading side they are fed from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::links::{LinkTarget, classify_link, resolve_link_path};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Follows a link clicked in `current_file`.
///
/// Returns the resolved path of an internal link whose target exists. A
/// missing target is logged and ignored; external links return `None`.
pub fn navigate(link: &str, current_file: &Path) -> Option<PathBuf> {
    match classify_link(link) {
        LinkTarget::Internal(url) => {
            let target = resolve_link_path(&url, current_file);
            if target.is_file() {
                Some(target)
            } else {
                log::warn!("File not found: {}", target.display());
                None
            }
        }
        LinkTarget::External(url) => {
            log::debug!("not navigating to external link {url}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn notes_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("index.md"), "# Index\n[Guide](guide/intro.md)").unwrap();
        fs::write(dir.path().join("guide/intro.md"), "[Back](../index.md)").unwrap();
        dir
    }

    #[test]
    fn reads_utf8_content() {
        let dir = notes_dir();
        let content = read_file(&dir.path().join("index.md")).unwrap();
        assert!(content.starts_with("# Index"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = notes_dir();
        let missing = dir.path().join("nope.md");
        match read_file(&missing) {
            Err(IoError::NotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = notes_dir();
        let path = dir.path().join("bin.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_file(&path), Err(IoError::Io(_))));
    }

    #[test]
    fn navigates_relative_links_both_ways() {
        let dir = notes_dir();
        let index = dir.path().join("index.md");
        let intro = dir.path().join("guide/intro.md");

        assert_eq!(navigate("guide/intro.md", &index), Some(intro.clone()));
        assert_eq!(navigate("../index.md", &intro), Some(index));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let dir = notes_dir();
        let index = dir.path().join("index.md");
        assert_eq!(navigate("ghost.md", &index), None);
    }

    #[test]
    fn external_links_do_not_navigate() {
        let dir = notes_dir();
        let index = dir.path().join("index.md");
        assert_eq!(navigate("https://example.com/a.md", &index), None);
    }
}
