//! Copying of whole template subtrees.

use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::copier::FileCopier;
use crate::error::{Error, Result};
use crate::paths::join_non_empty;
use crate::report::CopyReport;
use crate::substitution::SubstitutionMap;
use crate::walker::{walk, FileEntry};

/// Copies `source_root` and everything below it to
/// `destination_root/relative_destination_dir`, applying `substitutions` to
/// every text file.
///
/// Directories are created first, parents before children. Files are then
/// copied in parallel and the call returns once all of them have finished,
/// successfully or not. Per-file failures are collected in the returned
/// report instead of aborting the remaining copies.
///
/// # Errors
/// * `Error::TemplateError` if `source_root` cannot be traversed
/// * `Error::CopyError` if the destination's parent cannot be created
pub fn copy_and_replace_all<P, Q, R>(
    copier: &FileCopier,
    source_root: P,
    destination_root: Q,
    relative_destination_dir: R,
    substitutions: &SubstitutionMap,
) -> Result<CopyReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let source_root = source_root.as_ref();
    let destination_root = destination_root.as_ref();
    let relative_destination_dir = relative_destination_dir.as_ref();

    debug!(
        "Copying '{}' to '{}'.",
        source_root.display(),
        destination_root.join(relative_destination_dir).display()
    );

    let entries = walk(source_root)?;

    let target = join_non_empty(destination_root, relative_destination_dir);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| Error::CopyError { path: parent.to_path_buf(), source })?;
    }

    let (directories, files): (Vec<FileEntry>, Vec<FileEntry>) =
        entries.into_iter().partition(|entry| entry.is_dir);

    let copy_entry = |entry: &FileEntry| -> Result<()> {
        let relative = entry.path.strip_prefix(source_root).map_err(|_| {
            Error::TemplateError(format!(
                "'{}' is not inside '{}'",
                entry.path.display(),
                source_root.display()
            ))
        })?;
        let relative_destination = join_non_empty(relative_destination_dir, relative);
        copier.copy(&entry.path, destination_root, relative_destination, substitutions)
    };

    let mut report: CopyReport = directories.iter().map(copy_entry).collect();
    let files_report: CopyReport =
        files.par_iter().map(copy_entry).collect::<Vec<_>>().into_iter().collect();
    report.merge(files_report);

    Ok(report)
}
