//! Application configuration.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use static_metadata_plugin::StaticMetadataPluginConfig;
use static_rank_plugin::StaticRankPluginConfig;

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "RESET_PW_";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub metadata: StaticMetadataPluginConfig,
    pub ranking: StaticRankPluginConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file, then environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}
