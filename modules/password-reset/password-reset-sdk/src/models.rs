//! Statement models for the `password_reset` module.

use account_security::CanonicalUsername;
use secrecy::SecretString;

/// Parsed `RESET PASSWORD` statement payload.
///
/// The username is exactly as supplied by the caller: bare (`alice`) or
/// tenant-qualified (`alice@tenant7`).
#[derive(Debug, Clone)]
pub struct ResetPassword {
    username: String,
    /// Wrapped in `SecretString` so `Debug` redacts the value automatically.
    password: SecretString,
}

impl ResetPassword {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Requested username, before tenant resolution.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    #[must_use]
    pub fn into_password(self) -> SecretString {
        self.password
    }
}

/// Statements handed over by the SQL front end.
#[derive(Debug, Clone)]
pub enum Statement {
    ResetPassword(ResetPassword),
}

/// Authorized password change for a downstream executor.
///
/// Only produced after tenant resolution and the privilege check succeeded.
#[derive(Debug, Clone)]
pub struct AuthorizedChangeRequest {
    target: CanonicalUsername,
    new_password: SecretString,
}

impl AuthorizedChangeRequest {
    #[must_use]
    pub fn new(target: CanonicalUsername, new_password: SecretString) -> Self {
        Self {
            target,
            new_password,
        }
    }

    /// Tenant-qualified username whose password is changed.
    #[must_use]
    pub fn target(&self) -> &CanonicalUsername {
        &self.target
    }

    /// The new password, exactly as supplied in the statement.
    #[must_use]
    pub fn new_password(&self) -> &SecretString {
        &self.new_password
    }
}

/// Result of analyzing a [`Statement`].
#[derive(Debug, Clone)]
pub enum AnalyzedStatement {
    ResetPassword(AuthorizedChangeRequest),
}

impl AnalyzedStatement {
    /// Whether execution reports an affected-row count.
    #[must_use]
    pub fn expects_affected_rows(&self) -> bool {
        match self {
            Self::ResetPassword(_) => true,
        }
    }
}
