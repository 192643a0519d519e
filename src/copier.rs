//! Copying of a single template entry, with placeholder substitution for text
//! files.

use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::constants::BINARY_EXTENSIONS;
use crate::content::resolve_contents;
use crate::error::{Error, Result};
use crate::paths::join_non_empty;
use crate::substitution::SubstitutionMap;

/// How a source entry is materialised at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Created as an (empty) directory.
    Directory,
    /// Copied byte-for-byte.
    Binary,
    /// Read as text, substituted, then written.
    Text,
}

/// File extensions, including the leading dot, whose files are never
/// substituted. Matching ignores ASCII case.
#[derive(Debug, Clone)]
pub struct BinaryExtensions(HashSet<String>);

impl BinaryExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(extensions.into_iter().map(|ext| normalize_extension(ext.as_ref())).collect())
    }

    pub fn insert(&mut self, extension: &str) {
        self.0.insert(normalize_extension(extension));
    }

    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.contains(&normalize_extension(ext)))
    }
}

impl Default for BinaryExtensions {
    fn default() -> Self {
        Self::new(BINARY_EXTENSIONS)
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// Copies template entries into a destination tree.
#[derive(Debug, Clone, Default)]
pub struct FileCopier {
    binary_extensions: BinaryExtensions,
}

impl FileCopier {
    pub fn new(binary_extensions: BinaryExtensions) -> Self {
        Self { binary_extensions }
    }

    /// Determines how `source` will be copied. Symbolic links are classified
    /// by what they point to.
    pub fn classify<P: AsRef<Path>>(&self, source: P) -> io::Result<FileClass> {
        let source = source.as_ref();
        if fs::metadata(source)?.is_dir() {
            Ok(FileClass::Directory)
        } else if self.binary_extensions.matches(source) {
            Ok(FileClass::Binary)
        } else {
            Ok(FileClass::Text)
        }
    }

    /// Copies `source` to `destination_root/relative_destination`.
    ///
    /// Directories are created (with any missing parents); an existing
    /// directory counts as success. Binary files, and any file when
    /// `substitutions` is empty, are copied verbatim. Every other file goes
    /// through [`resolve_contents`] and is written with the permission bits of
    /// `source`. The parent of a file destination must already exist.
    ///
    /// # Errors
    /// * `Error::CopyError` naming the path that could not be read or written
    pub fn copy<P, Q, R>(
        &self,
        source: P,
        destination_root: Q,
        relative_destination: R,
        substitutions: &SubstitutionMap,
    ) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let source = source.as_ref();
        let destination = join_non_empty(destination_root, relative_destination);
        let class = self.classify(source).map_err(|e| copy_error(source, e))?;

        match class {
            FileClass::Directory => {
                debug!("Creating directory: {}", destination.display());
                fs::create_dir_all(&destination).map_err(|e| copy_error(&destination, e))
            }
            FileClass::Text if !substitutions.is_empty() => {
                debug!("Writing file: {}", destination.display());
                let permissions =
                    fs::metadata(source).map_err(|e| copy_error(source, e))?.permissions();
                let content = resolve_contents(source, substitutions)?;
                make_writable(&destination).map_err(|e| copy_error(&destination, e))?;
                fs::write(&destination, content).map_err(|e| copy_error(&destination, e))?;
                fs::set_permissions(&destination, permissions)
                    .map_err(|e| copy_error(&destination, e))
            }
            FileClass::Binary | FileClass::Text => {
                debug!("Copying file: {}", destination.display());
                make_writable(&destination).map_err(|e| copy_error(&destination, e))?;
                fs::copy(source, &destination)
                    .map(|_| ())
                    .map_err(|e| copy_error(&destination, e))
            }
        }
    }
}

fn copy_error(path: &Path, source: io::Error) -> Error {
    Error::CopyError { path: path.to_path_buf(), source }
}

// Output of an earlier run may carry read-only bits copied from the template.
fn make_writable(path: &Path) -> io::Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let mut permissions = metadata.permissions();
    if !permissions.readonly() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }
    #[cfg(not(unix))]
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);

    fs::set_permissions(path, permissions)
}
