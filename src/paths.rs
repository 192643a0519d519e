//! Lexical path arithmetic used to compute placeholder values.
//!
//! Nothing here touches the file system: paths are combined and compared
//! component-wise, so results stay valid for paths that do not exist yet.

use std::path::{Component, Path, PathBuf};

/// Removes `.` segments and folds `..` into the preceding normal segment.
///
/// Leading `..` segments of a relative path are kept; `..` directly under
/// the root is dropped.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// Expresses `target` relative to the directory `base`.
///
/// Both paths are normalised first. Paths on different prefixes (drives)
/// cannot be related, in which case `target` is returned unchanged.
/// Identical paths yield `.`.
pub fn relative_path<P: AsRef<Path>, Q: AsRef<Path>>(base: P, target: Q) -> PathBuf {
    let base = normalize_path(base);
    let target = normalize_path(target);

    if base.is_absolute() != target.is_absolute() {
        return target;
    }

    let base_parts: Vec<Component> = base.components().collect();
    let target_parts: Vec<Component> = target.components().collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (base_parts.first(), target_parts.first())
    {
        if a != b {
            return target;
        }
    }

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for part in &base_parts[common..] {
        if !matches!(part, Component::CurDir) {
            relative.push("..");
        }
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Joins `relative` onto `base` unless it is empty, so that a file copied
/// onto itself does not gain a trailing separator.
pub fn join_non_empty<P: AsRef<Path>, Q: AsRef<Path>>(base: P, relative: Q) -> PathBuf {
    let relative = relative.as_ref();
    if relative.as_os_str().is_empty() {
        base.as_ref().to_path_buf()
    } else {
        base.as_ref().join(relative)
    }
}
