use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the result.
///
/// # Errors
///
/// Fails on an invalid filter directive or if a subscriber is already set.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!(e))
}
