//! Error handling for rnta-windows.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while instantiating the project template.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A single file or directory could not be copied
    #[error("Failed to copy '{}': {source}.", path.display())]
    CopyError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required node module could not be found above the project root
    #[error("{module} node module is not installed.")]
    ModuleNotFoundError { module: String },

    /// The app manifest could not be found above the project root
    #[error("Could not find '{manifest}' in '{project_root}' or any of its parents.")]
    ManifestNotFoundError { manifest: String, project_root: String },

    /// The destination is missing or is not a directory
    #[error("Need a path to copy to: '{path}' is not a directory.")]
    DestinationError { path: String },

    /// The app manifest is not valid JSON
    #[error("Failed to parse manifest: {0}.")]
    ManifestError(#[from] serde_json::Error),

    /// A substitution pattern failed to compile
    #[error("Invalid substitution pattern: {0}.")]
    PatternError(#[from] regex::Error),

    /// Template traversal failed
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Some files were not written
    #[error("{failed} file(s) could not be copied, output is incomplete.")]
    IncompleteOutputError { failed: usize },
}

impl Error {
    /// Whether this error belongs to the fatal configuration class, i.e. the run
    /// was aborted before anything was written.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::ModuleNotFoundError { .. }
                | Error::ManifestNotFoundError { .. }
                | Error::DestinationError { .. }
                | Error::ConfigError(_)
        )
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
