//! Metadata models.

/// A tenant known to the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantInfo {
    /// Tenant ID, used as the qualifier of canonical usernames.
    pub id: String,
    /// Human-readable tenant name. May also be used as a login qualifier.
    pub name: String,
}

/// A user account registered in one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Username without tenant qualifier.
    pub username: String,
    /// ID of the tenant owning the account.
    pub tenant_id: String,
}
