//! Tenant-qualified username rules.
//!
//! A login name is either bare (`alice`) or carries an explicit tenant
//! qualifier (`alice@tenant7`). The qualifier is the text after the last
//! [`TENANT_SEPARATOR`], so bare names may themselves contain the separator
//! (`a@example.com@tenant7`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ROOT_NAME, TENANT_SEPARATOR};

/// Returns `true` when `raw` names an explicit tenant.
#[must_use]
pub fn has_tenant_info(raw: &str) -> bool {
    raw.contains(TENANT_SEPARATOR)
}

/// Returns `true` when `bare_username` is the reserved super identity.
#[must_use]
pub fn is_super_identity(bare_username: &str) -> bool {
    bare_username.eq_ignore_ascii_case(ROOT_NAME)
}

/// Borrowed view of a login name split into its bare part and optional
/// tenant qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginName<'a> {
    bare: &'a str,
    tenant: Option<&'a str>,
}

impl<'a> LoginName<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.rsplit_once(TENANT_SEPARATOR) {
            Some((bare, tenant)) => Self {
                bare,
                tenant: Some(tenant),
            },
            None => Self {
                bare: raw,
                tenant: None,
            },
        }
    }

    #[must_use]
    pub fn bare(&self) -> &'a str {
        self.bare
    }

    /// Explicit tenant qualifier, if the login name carried one.
    #[must_use]
    pub fn tenant(&self) -> Option<&'a str> {
        self.tenant
    }
}

/// Error returned when a string is not a tenant-qualified username.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("username '{0}' is not tenant-qualified")]
pub struct NotQualifiedError(pub String);

/// Fully tenant-qualified username, unique across the whole cluster.
///
/// Always of the form `<bare><TENANT_SEPARATOR><tenant>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalUsername(String);

impl CanonicalUsername {
    /// Qualify `bare_username` with `tenant_id`.
    #[must_use]
    pub fn new(bare_username: &str, tenant_id: &str) -> Self {
        Self(format!("{bare_username}{TENANT_SEPARATOR}{tenant_id}"))
    }

    /// Parse an already qualified username.
    ///
    /// # Errors
    ///
    /// Returns [`NotQualifiedError`] if `value` carries no tenant qualifier.
    pub fn parse(value: impl Into<String>) -> Result<Self, NotQualifiedError> {
        let value = value.into();
        if has_tenant_info(&value) {
            Ok(Self(value))
        } else {
            Err(NotQualifiedError(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn bare(&self) -> &str {
        LoginName::parse(&self.0).bare()
    }

    #[must_use]
    pub fn tenant(&self) -> &str {
        LoginName::parse(&self.0).tenant().unwrap_or_default()
    }
}

impl fmt::Display for CanonicalUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CanonicalUsername {
    type Error = NotQualifiedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CanonicalUsername> for String {
    fn from(value: CanonicalUsername) -> Self {
        value.0
    }
}
