//! Domain service for password reset authorization.

use std::sync::Arc;

use account_security::OperatorIdentity;
use password_reset_sdk::{AnalyzedStatement, AuthorizedChangeRequest, ResetPassword, Statement};
use privilege_rank_sdk::PrivilegeRankClient;
use tracing::{debug, info};
use user_metadata_sdk::UserMetadataClient;

use super::error::DomainError;
use super::privilege_gate::PrivilegeGate;
use super::tenant_resolver::TenantResolver;

/// Password reset authorization service.
///
/// Runs a linear, fail-fast pipeline per statement:
/// 1. reject tenant-qualified targets from non-root operators
/// 2. resolve the tenant-qualified target username
/// 3. check the operator's privilege over the resolved target
///
/// The service holds no mutable state and may be shared across threads.
pub struct Service {
    resolver: TenantResolver,
    gate: PrivilegeGate,
}

impl Service {
    #[must_use]
    pub fn new(
        metadata: Arc<dyn UserMetadataClient>,
        ranking: Arc<dyn PrivilegeRankClient>,
    ) -> Self {
        Self {
            resolver: TenantResolver::new(metadata),
            gate: PrivilegeGate::new(ranking),
        }
    }

    /// Authorize a password reset and build the change request.
    ///
    /// # Errors
    ///
    /// - `IllegalCrossTenantAddressing`, `TargetNotFound`, `InsufficientPrivilege`
    ///   when the request is denied
    /// - `MetadataUnavailable` / `Internal` for collaborator failures
    #[tracing::instrument(
        skip_all,
        fields(operator = %operator.bare_username(), tenant = %operator.tenant_id())
    )]
    pub fn reset_password(
        &self,
        operator: &OperatorIdentity,
        statement: ResetPassword,
    ) -> Result<AuthorizedChangeRequest, DomainError> {
        TenantResolver::check_addressing(operator, statement.username())?;

        let target = self.resolver.resolve(operator, statement.username())?;
        debug!(requested = %statement.username(), user = %target, "Resolved target user");

        self.gate.authorize(operator, &target, statement.username())?;

        info!(user = %target, "Password reset authorized");
        Ok(AuthorizedChangeRequest::new(target, statement.into_password()))
    }

    /// Analyze a parsed statement.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reset_password`].
    pub fn analyze(
        &self,
        operator: &OperatorIdentity,
        statement: Statement,
    ) -> Result<AnalyzedStatement, DomainError> {
        match statement {
            Statement::ResetPassword(stmt) => self
                .reset_password(operator, stmt)
                .map(AnalyzedStatement::ResetPassword),
        }
    }
}
