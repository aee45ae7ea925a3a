//! Logger setup for the `debber` binary.

/// Initializes `env_logger`: info by default, debug with `--verbose`.
/// `RUST_LOG` still overrides both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .format_target(false)
        .init();
}
