//! Stderr diagnostics via the `log` facade.

/// Initialize the logger. Defaults to `warn` so parse diagnostics reach
/// stderr without any RUST_LOG configuration.
pub fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
