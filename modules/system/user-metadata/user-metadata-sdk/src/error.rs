//! Error types for user metadata lookups.

use thiserror::Error;

/// Errors that can occur when looking up user metadata.
#[derive(Debug, Error)]
pub enum UserMetadataError {
    /// No user with this name exists in the named tenant.
    #[error("user '{username}' not found in tenant '{tenant}'")]
    UserNotFound { username: String, tenant: String },

    /// The metadata provider is not available yet.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
