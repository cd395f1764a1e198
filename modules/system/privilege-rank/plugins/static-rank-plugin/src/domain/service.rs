//! Service implementation for the static privilege rank plugin.

use std::cmp::Ordering;
use std::collections::HashSet;

use account_security::{LoginName, is_super_identity};

use crate::config::StaticRankPluginConfig;

/// Administrative rank of an identity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Member,
    TenantAdmin,
    Super,
}

/// Static privilege rank service.
pub struct Service {
    tenant_admins: HashSet<String>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticRankPluginConfig) -> Self {
        Self {
            tenant_admins: cfg.tenant_admins.iter().cloned().collect(),
        }
    }

    /// Rank of a bare username.
    #[must_use]
    pub fn rank_of(&self, bare_username: &str) -> Rank {
        if is_super_identity(bare_username) {
            Rank::Super
        } else if self.tenant_admins.contains(bare_username) {
            Rank::TenantAdmin
        } else {
            Rank::Member
        }
    }

    /// Compare an operator's bare username against a (possibly qualified)
    /// target username.
    #[must_use]
    pub fn compare(&self, operator: &str, target: &str) -> Ordering {
        let target_bare = LoginName::parse(target).bare();
        let operator_rank = self.rank_of(operator);
        let target_rank = self.rank_of(target_bare);

        if operator == target_bare || (operator_rank == Rank::Super && target_rank == Rank::Super)
        {
            return Ordering::Equal;
        }

        if operator_rank > target_rank {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}
