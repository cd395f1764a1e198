//! Resolution of requested usernames to tenant-qualified usernames.

use std::sync::Arc;

use account_security::{CanonicalUsername, LoginName, OperatorIdentity, has_tenant_info};
use tracing::debug;
use user_metadata_sdk::{UserMetadataClient, UserMetadataError};

use super::error::DomainError;

/// Resolves a requested username against the operator's tenant or, for the
/// super identity, against the named tenant's metadata.
pub struct TenantResolver {
    metadata: Arc<dyn UserMetadataClient>,
}

impl TenantResolver {
    #[must_use]
    pub fn new(metadata: Arc<dyn UserMetadataClient>) -> Self {
        Self { metadata }
    }

    /// Reject explicit tenant qualifiers from anyone but the super identity.
    ///
    /// Purely syntactic; never touches metadata, so unprivileged operators
    /// cannot probe for the existence of foreign users.
    ///
    /// # Errors
    ///
    /// `IllegalCrossTenantAddressing` if a non-root operator qualified the name.
    pub fn check_addressing(
        operator: &OperatorIdentity,
        requested: &str,
    ) -> Result<(), DomainError> {
        if !operator.is_super() && has_tenant_info(requested) {
            return Err(DomainError::IllegalCrossTenantAddressing {
                operator: operator.bare_username().to_owned(),
                username: requested.to_owned(),
            });
        }
        Ok(())
    }

    /// Resolve `requested` to a canonical username.
    ///
    /// Bare names, including the empty name, are qualified with the
    /// operator's own tenant without any lookup. Qualified names (super
    /// identity only) are looked up.
    ///
    /// # Errors
    ///
    /// - `IllegalCrossTenantAddressing` from [`Self::check_addressing`]
    /// - `TargetNotFound` if the qualified user does not exist or its bare
    ///   part is empty
    /// - `MetadataUnavailable` / `Internal` for lookup failures
    pub fn resolve(
        &self,
        operator: &OperatorIdentity,
        requested: &str,
    ) -> Result<CanonicalUsername, DomainError> {
        Self::check_addressing(operator, requested)?;

        let login = LoginName::parse(requested);
        let Some(tenant) = login.tenant() else {
            return Ok(CanonicalUsername::new(login.bare(), operator.tenant_id()));
        };

        if login.bare().is_empty() {
            return Err(DomainError::TargetNotFound {
                username: requested.to_owned(),
            });
        }

        debug!(tenant, "Looking up tenant-qualified user");
        self.metadata
            .lookup_user_in_tenant(login.bare(), tenant)
            .map_err(|e| match e {
                UserMetadataError::UserNotFound { .. } => DomainError::TargetNotFound {
                    username: requested.to_owned(),
                },
                UserMetadataError::ServiceUnavailable(reason) => {
                    DomainError::MetadataUnavailable(reason)
                }
                UserMetadataError::Internal(reason) => DomainError::Internal(reason),
            })
    }
}
