//! Reading the resource list out of the app manifest (`app.json`).

use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Extracts the resources declared for `platform` from a parsed manifest.
///
/// `resources.<platform>` is used when present, otherwise `resources` itself.
/// Returns `None` when the selected value is not an array, meaning there is
/// nothing to copy. Entries that are not strings are skipped.
pub fn resources_for_platform(manifest: &serde_json::Value, platform: &str) -> Option<Vec<String>> {
    let resources = manifest.get("resources")?;
    let selected = match resources.get(platform) {
        Some(value) if is_truthy(value) => value,
        _ => resources,
    };

    let Some(entries) = selected.as_array() else {
        debug!("Manifest resources are not a list, nothing to copy");
        return None;
    };

    Some(
        entries
            .iter()
            .filter_map(|entry| match entry.as_str() {
                Some(path) => Some(path.to_string()),
                None => {
                    warn!("Ignoring resource entry {entry}: expected a path");
                    None
                }
            })
            .collect(),
    )
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Reads and parses the manifest at `path`, returning its resource list for
/// `platform`.
///
/// # Errors
/// * `Error::CopyError` if the manifest cannot be read
/// * `Error::ManifestError` if it is not valid JSON
pub fn read_resources<P: AsRef<Path>>(path: P, platform: &str) -> Result<Option<Vec<String>>> {
    let path = path.as_ref();
    debug!("Reading manifest from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|source| Error::CopyError { path: path.to_path_buf(), source })?;
    let manifest: serde_json::Value = serde_json::from_str(&content)?;
    Ok(resources_for_platform(&manifest, platform))
}
