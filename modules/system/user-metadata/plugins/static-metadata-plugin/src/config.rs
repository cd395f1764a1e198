//! Configuration for the static user metadata plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticMetadataPluginConfig {
    /// Known tenants.
    pub tenants: Vec<TenantConfig>,

    /// Registered user accounts.
    pub users: Vec<UserConfig>,
}

/// Tenant definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    /// Tenant ID.
    pub id: String,

    /// Tenant name. Defaults to the ID when omitted.
    #[serde(default)]
    pub name: Option<String>,
}

/// User account definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Bare username.
    pub username: String,

    /// Owning tenant ID.
    pub tenant_id: String,
}
