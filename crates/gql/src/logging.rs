//! Log output for the CLI.
//!
//! The libraries log through the `log` facade; the subscriber installed here
//! forwards those records to stderr alongside the CLI's own.

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Picks the level from `--verbose` or a `LOG_LEVEL` value.
///
/// Names are matched case-insensitively; `verbose` is an alias for `debug`.
/// An unknown name is returned as the error.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_value: Option<&str>,
) -> Result<tracing::Level, String> {
    if verbose {
        return Ok(tracing::Level::DEBUG);
    }
    let Some(name) = env_value.map(str::trim) else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    [
        ("error", tracing::Level::ERROR),
        ("warn", tracing::Level::WARN),
        ("info", tracing::Level::INFO),
        ("debug", tracing::Level::DEBUG),
        ("verbose", tracing::Level::DEBUG),
        ("trace", tracing::Level::TRACE),
    ]
    .into_iter()
    .find(|(known, _)| known.eq_ignore_ascii_case(name))
    .map(|(_, level)| level)
    .ok_or_else(|| name.to_string())
}

pub(crate) fn setup_logger(verbose: bool) {
    let env_value = std::env::var("LOG_LEVEL").ok();
    let resolved = resolve_log_level(verbose, env_value.as_deref());
    let log_level = resolved.clone().unwrap_or(DEFAULT_LOG_LEVEL);

    // `init()` also installs the `log` bridge.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Err(invalid) = resolved {
        log::warn!(
            "Ignoring invalid `LOG_LEVEL` value `{invalid}`; logging at \
            `{log_level}`.",
        );
    }
}
