//! Domain errors for password reset authorization.

use password_reset_sdk::PasswordResetError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("operator '{operator}' may not address tenant-qualified user '{username}'")]
    IllegalCrossTenantAddressing { operator: String, username: String },

    #[error("user '{username}' not found")]
    TargetNotFound { username: String },

    #[error("operator '{operator}' has no authority over user '{username}'")]
    InsufficientPrivilege { operator: String, username: String },

    #[error("user metadata is not available: {0}")]
    MetadataUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether the error is an authorization decision rather than a failure.
    #[must_use]
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::IllegalCrossTenantAddressing { .. }
                | Self::TargetNotFound { .. }
                | Self::InsufficientPrivilege { .. }
        )
    }
}

impl From<DomainError> for PasswordResetError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::IllegalCrossTenantAddressing { .. } => Self::IllegalCrossTenantAddressing,
            DomainError::TargetNotFound { username } => Self::TargetNotFound { username },
            DomainError::InsufficientPrivilege { operator, username } => {
                Self::InsufficientPrivilege { operator, username }
            }
            DomainError::MetadataUnavailable(reason) => Self::ServiceUnavailable(reason),
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
