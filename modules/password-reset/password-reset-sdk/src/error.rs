//! Error types for the `password_reset` module.

use thiserror::Error;

/// Raw error kind; the transport layer maps it to a protocol status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operator is not allowed to perform the action.
    Forbidden,
    /// The request named something that does not exist.
    NotFound,
    /// A collaborator is temporarily unavailable.
    Unavailable,
    /// Unexpected failure.
    Internal,
}

/// Errors that can be returned by the `PasswordResetClient`.
///
/// All errors are terminal for the request; nothing has been applied.
#[derive(Debug, Error)]
pub enum PasswordResetError {
    /// A non-root operator named an explicit tenant.
    #[error("only root user could set password by specifying the tenant id")]
    IllegalCrossTenantAddressing,

    /// No user matches the requested name and tenant.
    #[error("user [{username}] not found")]
    TargetNotFound { username: String },

    /// The operator lacks authority over the target user.
    ///
    /// Carries the operator's bare name and the username as requested, never
    /// the resolved canonical form.
    #[error("user [{operator}] have no permission to modify user[{username}] password")]
    InsufficientPrivilege { operator: String, username: String },

    /// A collaborator is not available yet.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PasswordResetError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalCrossTenantAddressing | Self::InsufficientPrivilege { .. } => {
                ErrorKind::Forbidden
            }
            Self::TargetNotFound { .. } => ErrorKind::NotFound,
            Self::ServiceUnavailable(_) => ErrorKind::Unavailable,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
