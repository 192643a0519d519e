//! rnta-windows entry point.
//! Parses arguments, resolves the anchors and generates the project.

use log::error;
use rnta_windows::{
    cli::{get_args, Args},
    config::ScaffoldConfig,
    error::{default_error_handler, Result},
    logger::init_logger,
    scaffolder::scaffold,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Loads the configuration, defaults unless `--config` is given
/// 2. Resolves anchors from the project root
/// 3. Copies resources, project files and the solution file
/// 4. Fails if any file could not be written
fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ScaffoldConfig::load(path)?,
        None => ScaffoldConfig::default(),
    };

    let report = scaffold(&args.project_root, config)?;
    for failure in &report.copy.failures {
        error!("{}", failure);
    }
    report.copy.into_result()?;

    Ok(())
}
