//! Command-line interface implementation.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generates the Windows project for a React Native test app", long_about = None)]
pub struct Args {
    /// Root of the app to generate the project for
    #[arg(value_name = "PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// JSON or YAML file overriding the default layout
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
