use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::substitution::SubstitutionMap;

/// Reads the text file at `path` and applies `substitutions` to its content.
///
/// # Errors
/// * `Error::CopyError` if the file cannot be read as UTF-8 text
pub fn resolve_contents<P: AsRef<Path>>(path: P, substitutions: &SubstitutionMap) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| Error::CopyError { path: path.to_path_buf(), source })?;
    Ok(substitutions.apply(&content))
}
