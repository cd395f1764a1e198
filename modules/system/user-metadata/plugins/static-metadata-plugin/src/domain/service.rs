//! Service implementation for the static user metadata plugin.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use account_security::CanonicalUsername;
use arc_swap::ArcSwap;
use user_metadata_sdk::{TenantInfo, UserInfo};

use crate::config::StaticMetadataPluginConfig;

/// Immutable view of all tenants and users at one point in time.
#[derive(Debug, Default)]
pub struct MetadataSnapshot {
    tenants: HashMap<String, TenantInfo>,
    tenant_ids_by_name: HashMap<String, String>,
    users: HashSet<(String, String)>,
}

impl MetadataSnapshot {
    /// Build a snapshot from tenant and user lists.
    ///
    /// Users referring to an unknown tenant are skipped.
    #[must_use]
    pub fn new(tenants: Vec<TenantInfo>, users: Vec<UserInfo>) -> Self {
        let tenant_ids_by_name = tenants
            .iter()
            .map(|t| (t.name.clone(), t.id.clone()))
            .collect();
        let tenants: HashMap<String, TenantInfo> =
            tenants.into_iter().map(|t| (t.id.clone(), t)).collect();

        let mut indexed = HashSet::with_capacity(users.len());
        for user in users {
            if !tenants.contains_key(&user.tenant_id) {
                tracing::warn!(
                    username = %user.username,
                    tenant_id = %user.tenant_id,
                    "Skipping user of unknown tenant"
                );
                continue;
            }
            indexed.insert((user.username, user.tenant_id));
        }

        Self {
            tenants,
            tenant_ids_by_name,
            users: indexed,
        }
    }

    /// Resolve a login qualifier (tenant ID first, then tenant name).
    #[must_use]
    pub fn resolve_tenant(&self, qualifier: &str) -> Option<&TenantInfo> {
        self.tenants.get(qualifier).or_else(|| {
            self.tenant_ids_by_name
                .get(qualifier)
                .and_then(|id| self.tenants.get(id))
        })
    }

    /// Look up a user by bare name within the tenant named by `qualifier`.
    #[must_use]
    pub fn find_user(&self, bare_username: &str, qualifier: &str) -> Option<CanonicalUsername> {
        let tenant = self.resolve_tenant(qualifier)?;
        self.users
            .contains(&(bare_username.to_owned(), tenant.id.clone()))
            .then(|| CanonicalUsername::new(bare_username, &tenant.id))
    }

    #[must_use]
    pub fn tenant_count(&self) -> usize {
        self.tenants.len()
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Static user metadata service.
///
/// Holds the current [`MetadataSnapshot`] behind an [`ArcSwap`] so readers
/// never block writers and each lookup sees one consistent snapshot.
pub struct Service {
    snapshot: ArcSwap<MetadataSnapshot>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticMetadataPluginConfig) -> Self {
        let tenants = cfg
            .tenants
            .iter()
            .map(|t| TenantInfo {
                id: t.id.clone(),
                name: t.name.clone().unwrap_or_else(|| t.id.clone()),
            })
            .collect();
        let users = cfg
            .users
            .iter()
            .map(|u| UserInfo {
                username: u.username.clone(),
                tenant_id: u.tenant_id.clone(),
            })
            .collect();

        Self::with_snapshot(MetadataSnapshot::new(tenants, users))
    }

    #[must_use]
    pub fn with_snapshot(snapshot: MetadataSnapshot) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<MetadataSnapshot> {
        self.snapshot.load_full()
    }

    /// Atomically publish new metadata. Lookups already in flight keep
    /// reading the snapshot they loaded.
    #[cfg(test)]
    pub(crate) fn replace_snapshot(&self, snapshot: MetadataSnapshot) {
        tracing::info!(
            tenants = snapshot.tenant_count(),
            users = snapshot.user_count(),
            "Replacing user metadata snapshot"
        );
        self.snapshot.store(Arc::new(snapshot));
    }
}
