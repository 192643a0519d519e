//! Depth-first, pre-order enumeration of a template tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One entry produced by [`walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lists `root` followed by every entry beneath it, each directory before its
/// descendants.
///
/// Siblings are sorted by file name so repeated walks yield the same order.
/// Symbolic links are not followed, which rules out cycles. When `root` is not
/// a directory the result is the single entry for `root`.
///
/// # Errors
/// * `Error::TemplateError` if `root` or any directory below it cannot be read
pub fn walk<P: AsRef<Path>>(root: P) -> Result<Vec<FileEntry>> {
    WalkDir::new(root.as_ref())
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            Ok(FileEntry { is_dir: entry.file_type().is_dir(), path: entry.into_path() })
        })
        .collect()
}
