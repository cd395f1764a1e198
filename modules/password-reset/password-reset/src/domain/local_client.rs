//! Local (in-process) client for password reset authorization.

use std::sync::Arc;

use account_security::OperatorIdentity;
use password_reset_sdk::{
    AnalyzedStatement, AuthorizedChangeRequest, PasswordResetClient, PasswordResetError,
    ResetPassword, Statement,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct PasswordResetLocalClient {
    svc: Arc<Service>,
}

impl PasswordResetLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> PasswordResetError {
    if e.is_denial() {
        tracing::warn!(operation = op, error = %e, "password reset denied");
    } else {
        tracing::error!(operation = op, error = ?e, "password_reset call failed");
    }
    e.into()
}

impl PasswordResetClient for PasswordResetLocalClient {
    fn process(
        &self,
        operator: &OperatorIdentity,
        statement: ResetPassword,
    ) -> Result<AuthorizedChangeRequest, PasswordResetError> {
        self.svc
            .reset_password(operator, statement)
            .map_err(|e| log_and_convert("process", e))
    }

    fn analyze(
        &self,
        operator: &OperatorIdentity,
        statement: Statement,
    ) -> Result<AnalyzedStatement, PasswordResetError> {
        self.svc
            .analyze(operator, statement)
            .map_err(|e| log_and_convert("analyze", e))
    }
}
