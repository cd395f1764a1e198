//! Client implementation for the static user metadata plugin.
//!
//! Implements `UserMetadataClient` using the domain service.

use account_security::CanonicalUsername;
use user_metadata_sdk::{UserMetadataClient, UserMetadataError};

use super::service::Service;

impl UserMetadataClient for Service {
    fn lookup_user_in_tenant(
        &self,
        bare_username: &str,
        tenant_qualifier: &str,
    ) -> Result<CanonicalUsername, UserMetadataError> {
        // One snapshot per lookup
        let snapshot = self.snapshot();
        snapshot
            .find_user(bare_username, tenant_qualifier)
            .ok_or_else(|| UserMetadataError::UserNotFound {
                username: bare_username.to_owned(),
                tenant: tenant_qualifier.to_owned(),
            })
    }
}
