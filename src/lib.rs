//! rnta-windows instantiates the Windows project of the React Native test app.
//! It copies the project template into the app's `node_modules`, rewriting
//! path placeholders so the generated project points back at the app, its
//! manifest resources and the native framework module.

/// Upward search for modules and the app manifest
pub mod anchor;

/// Command-line interface module
pub mod cli;

/// Configuration with built-in defaults and optional file overrides
/// Supports JSON and YAML formats
pub mod config;

/// Common constants: directory names, template files, placeholders
pub mod constants;

/// Placeholder substitution in text files
pub mod content;

/// Single entry copy with binary/text classification
pub mod copier;

/// Error types and handling
pub mod error;

/// Recursive copy of template subtrees
pub mod instantiator;

/// Logger initialisation
pub mod logger;

/// Resource list extraction from the app manifest
pub mod manifest;

/// Lexical path normalisation and relative paths
pub mod paths;

/// Aggregated copy outcomes
pub mod report;

/// Project generation pipeline
pub mod scaffolder;

/// Ordered, compiled substitution patterns
pub mod substitution;

/// Pre-order traversal of template trees
pub mod walker;
