#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod constants;
pub mod identity;
pub mod username;

pub use identity::{OperatorIdentity, OperatorIdentityBuilder};
pub use username::{
    CanonicalUsername, LoginName, NotQualifiedError, has_tenant_info, is_super_identity,
};
