//! Privilege check between the operator and a resolved target.

use std::sync::Arc;

use account_security::{CanonicalUsername, OperatorIdentity};
use privilege_rank_sdk::{PrivilegeRankClient, is_authorized};
use tracing::debug;

use super::error::DomainError;

/// Allows or denies an action of the operator on a resolved target user.
pub struct PrivilegeGate {
    ranking: Arc<dyn PrivilegeRankClient>,
}

impl PrivilegeGate {
    #[must_use]
    pub fn new(ranking: Arc<dyn PrivilegeRankClient>) -> Self {
        Self { ranking }
    }

    /// Authorize `operator` over `target`.
    ///
    /// `requested` is the username as the caller supplied it; it is the only
    /// form of the target that appears in a denial.
    ///
    /// # Errors
    ///
    /// `InsufficientPrivilege` if the ranking places the operator below the
    /// target.
    pub fn authorize(
        &self,
        operator: &OperatorIdentity,
        target: &CanonicalUsername,
        requested: &str,
    ) -> Result<(), DomainError> {
        if operator.canonical() == *target {
            debug!("Self-service password reset");
            return Ok(());
        }

        let order = self
            .ranking
            .compare_rank(operator.bare_username(), target.as_str());
        if is_authorized(order) {
            Ok(())
        } else {
            Err(DomainError::InsufficientPrivilege {
                operator: operator.bare_username().to_owned(),
                username: requested.to_owned(),
            })
        }
    }
}
