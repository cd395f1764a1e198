use crate::username::{CanonicalUsername, is_super_identity};

/// `OperatorIdentity` is the authenticated caller on whose behalf a statement runs.
///
/// Built by the authentication layer and passed through statement analysis.
/// The bare username never carries a tenant qualifier; the tenant is always
/// resolved before any authorization check runs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OperatorIdentity {
    /// Username with any tenant qualifier stripped.
    bare_username: String,
    /// Tenant the operator's session belongs to.
    tenant_id: String,
}

impl OperatorIdentity {
    /// Create a new `OperatorIdentity` builder
    #[must_use]
    pub fn builder() -> OperatorIdentityBuilder {
        OperatorIdentityBuilder::default()
    }

    #[must_use]
    pub fn bare_username(&self) -> &str {
        &self.bare_username
    }

    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Whether the operator is the reserved super identity.
    #[must_use]
    pub fn is_super(&self) -> bool {
        is_super_identity(&self.bare_username)
    }

    /// The operator's own tenant-qualified username.
    #[must_use]
    pub fn canonical(&self) -> CanonicalUsername {
        CanonicalUsername::new(&self.bare_username, &self.tenant_id)
    }
}

#[derive(Default)]
pub struct OperatorIdentityBuilder {
    bare_username: Option<String>,
    tenant_id: Option<String>,
}

impl OperatorIdentityBuilder {
    #[must_use]
    pub fn bare_username(mut self, bare_username: &str) -> Self {
        self.bare_username = Some(bare_username.to_owned());
        self
    }

    #[must_use]
    pub fn tenant_id(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_owned());
        self
    }

    #[must_use]
    pub fn build(self) -> OperatorIdentity {
        OperatorIdentity {
            bare_username: self.bare_username.unwrap_or_default(),
            tenant_id: self.tenant_id.unwrap_or_default(),
        }
    }
}
