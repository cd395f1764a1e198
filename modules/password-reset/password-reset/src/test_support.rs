#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use account_security::{CanonicalUsername, OperatorIdentity};
use privilege_rank_sdk::PrivilegeRankClient;
use user_metadata_sdk::{UserMetadataClient, UserMetadataError};

use crate::domain::Service;

#[must_use]
pub fn operator(bare_username: &str, tenant_id: &str) -> OperatorIdentity {
    OperatorIdentity::builder()
        .bare_username(bare_username)
        .tenant_id(tenant_id)
        .build()
}

/// In-memory metadata that counts lookups.
#[derive(Default)]
pub struct FakeMetadata {
    users: Vec<(String, String)>,
    unavailable: bool,
    lookups: AtomicUsize,
}

impl FakeMetadata {
    #[must_use]
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        Self {
            users: users
                .iter()
                .map(|(u, t)| ((*u).to_owned(), (*t).to_owned()))
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(AtomicOrdering::SeqCst)
    }
}

impl UserMetadataClient for FakeMetadata {
    fn lookup_user_in_tenant(
        &self,
        bare_username: &str,
        tenant_qualifier: &str,
    ) -> Result<CanonicalUsername, UserMetadataError> {
        self.lookups.fetch_add(1, AtomicOrdering::SeqCst);
        if self.unavailable {
            return Err(UserMetadataError::ServiceUnavailable(
                "metadata not loaded".to_owned(),
            ));
        }
        self.users
            .iter()
            .find(|(u, t)| u == bare_username && t == tenant_qualifier)
            .map(|(u, t)| CanonicalUsername::new(u, t))
            .ok_or_else(|| UserMetadataError::UserNotFound {
                username: bare_username.to_owned(),
                tenant: tenant_qualifier.to_owned(),
            })
    }
}

/// Ranking that always answers the same ordering and counts calls.
pub struct FixedRanking {
    order: Ordering,
    calls: AtomicUsize,
}

impl FixedRanking {
    #[must_use]
    pub fn new(order: Ordering) -> Self {
        Self {
            order,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }
}

impl PrivilegeRankClient for FixedRanking {
    fn compare_rank(&self, _operator: &str, _target: &str) -> Ordering {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.order
    }
}

#[must_use]
pub fn service(metadata: &Arc<FakeMetadata>, ranking: &Arc<FixedRanking>) -> Service {
    Service::new(metadata.clone(), ranking.clone())
}
