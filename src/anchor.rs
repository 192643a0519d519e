//! Upward search for anchor paths such as `node_modules/<module>` or `app.json`.

use log::debug;
use std::path::{Path, PathBuf};

use crate::paths::normalize_path;

/// Searches `start` and its ancestors for the nearest directory containing
/// `target`.
///
/// Returns the location of the match expressed relative to `start`, e.g.
/// `../../node_modules/react-native-windows` when the match is two levels up,
/// or `None` when nothing matched. The file system root itself is never
/// checked, so the search always terminates. `start` is normalised first, so
/// `a/../b` searches the ancestors of `b`.
///
/// # Arguments
/// * `start` - Directory the search begins in
/// * `target` - Relative path of the file or directory being looked for
pub fn find_closest_path<P: AsRef<Path>, Q: AsRef<Path>>(start: P, target: Q) -> Option<PathBuf> {
    let target = target.as_ref();
    let mut current = normalize_path(std::path::absolute(start.as_ref()).ok()?);
    let mut relative_prefix = PathBuf::new();

    // `parent()` is `None` only for the root (or a bare prefix).
    while current.parent().is_some() {
        let candidate = current.join(target);
        if candidate.exists() {
            debug!("Found '{}' at '{}'.", target.display(), candidate.display());
            return Some(relative_prefix.join(target));
        }
        current.pop();
        relative_prefix.push("..");
    }

    debug!("'{}' was not found above '{}'.", target.display(), start.as_ref().display());
    None
}
