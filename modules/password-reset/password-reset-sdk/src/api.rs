//! Public API trait for password reset authorization.

use account_security::OperatorIdentity;

use crate::error::PasswordResetError;
use crate::models::{AnalyzedStatement, AuthorizedChangeRequest, ResetPassword, Statement};

/// Public API trait for password reset authorization.
///
/// Decides whether `operator` may reset the requested user's password and
/// resolves the tenant-qualified target. Nothing is mutated; the returned
/// request is applied by a downstream executor.
pub trait PasswordResetClient: Send + Sync {
    /// Authorize a single password reset.
    ///
    /// # Errors
    ///
    /// - `IllegalCrossTenantAddressing` if a non-root operator names a tenant
    /// - `TargetNotFound` if the qualified target does not exist
    /// - `InsufficientPrivilege` if the operator lacks authority over the target
    /// - `ServiceUnavailable` / `Internal` for collaborator failures
    fn process(
        &self,
        operator: &OperatorIdentity,
        statement: ResetPassword,
    ) -> Result<AuthorizedChangeRequest, PasswordResetError>;

    /// Analyze a parsed statement.
    ///
    /// # Errors
    ///
    /// Same as [`PasswordResetClient::process`].
    fn analyze(
        &self,
        operator: &OperatorIdentity,
        statement: Statement,
    ) -> Result<AnalyzedStatement, PasswordResetError>;
}
