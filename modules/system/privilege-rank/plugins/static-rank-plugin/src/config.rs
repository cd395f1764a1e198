//! Configuration for the static privilege rank plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticRankPluginConfig {
    /// Bare usernames that act as tenant administrators.
    pub tenant_admins: Vec<String>,
}

impl Default for StaticRankPluginConfig {
    fn default() -> Self {
        Self {
            tenant_admins: vec!["admin".to_owned()],
        }
    }
}
