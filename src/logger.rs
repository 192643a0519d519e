use log::LevelFilter;

/// Sets up `env_logger` for the binary. Verbose mode adds per-file `debug`
/// output to the run summary and warnings.
pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .init();
}
