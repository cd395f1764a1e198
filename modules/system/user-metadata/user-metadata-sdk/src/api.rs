//! Public API trait for user metadata lookups.

use account_security::CanonicalUsername;

use crate::error::UserMetadataError;

/// Lookup API over the cluster's tenant and user metadata.
///
/// Implementations must answer each call from a single consistent snapshot
/// of the metadata; concurrent metadata updates must not be observed halfway
/// through one lookup.
///
/// ```ignore
/// let canonical = metadata.lookup_user_in_tenant("bob", "t2")?;
/// assert_eq!(canonical.as_str(), "bob@t2");
/// ```
pub trait UserMetadataClient: Send + Sync {
    /// Find `bare_username` in the tenant named by `tenant_qualifier`,
    /// searching the full set of known tenants.
    ///
    /// The qualifier may be a tenant ID or a tenant name; the returned
    /// username is always qualified with the tenant ID.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no such user/tenant combination exists
    /// - `ServiceUnavailable` if metadata is not available yet
    /// - `Internal` for unexpected errors
    fn lookup_user_in_tenant(
        &self,
        bare_username: &str,
        tenant_qualifier: &str,
    ) -> Result<CanonicalUsername, UserMetadataError>;
}
