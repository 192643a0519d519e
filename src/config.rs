//! Configuration of the template instantiation.
//! Every field has a built-in default; an optional JSON or YAML file can
//! override any subset of them.

use crate::constants::{
    BINARY_EXTENSIONS, BUNDLE_DIR, GENERATED_DIR, MANIFEST_FILE, NODE_MODULES_DIR, PLATFORM,
    PROJECT_DIR, PROJECT_FILES, REACT_NATIVE_MODULE, SOLUTION_FILE, TEST_APP_MODULE,
};
use crate::copier::BinaryExtensions;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaffoldConfig {
    /// Platform key, used for the manifest lookup and the output directory
    pub platform: String,
    /// Name of the directory holding installed modules
    pub node_modules_dir: String,
    /// Native framework module the project builds against
    pub react_native_module: String,
    /// Module shipping the project template
    pub test_app_module: String,
    pub generated_dir: String,
    pub bundle_dir: String,
    pub project_dir: String,
    pub manifest_file: String,
    pub project_files: Vec<String>,
    pub solution_file: String,
    pub binary_extensions: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            platform: PLATFORM.to_string(),
            node_modules_dir: NODE_MODULES_DIR.to_string(),
            react_native_module: REACT_NATIVE_MODULE.to_string(),
            test_app_module: TEST_APP_MODULE.to_string(),
            generated_dir: GENERATED_DIR.to_string(),
            bundle_dir: BUNDLE_DIR.to_string(),
            project_dir: PROJECT_DIR.to_string(),
            manifest_file: MANIFEST_FILE.to_string(),
            project_files: PROJECT_FILES.iter().map(|f| f.to_string()).collect(),
            solution_file: SOLUTION_FILE.to_string(),
            binary_extensions: BINARY_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ScaffoldConfig {
    /// Loads overrides from `path`, trying JSON first and YAML second.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the file is missing or matches neither format
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigError(format!(
                "Invalid configuration path: {}",
                path.display()
            )));
        }
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        Self::parse(&content)
    }

    /// Parses configuration content, JSON first and YAML second.
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
        }
    }

    /// `node_modules/<module>`, the anchor searched for a module.
    pub fn module_anchor(&self, module: &str) -> PathBuf {
        Path::new(&self.node_modules_dir).join(module)
    }

    pub fn binary_extensions(&self) -> BinaryExtensions {
        BinaryExtensions::new(&self.binary_extensions)
    }
}
