//! Password Reset Module
//!
//! Authorizes `RESET PASSWORD` statements: resolves the tenant-qualified
//! target user and checks the operator's privilege over it. Collaborators
//! (user metadata, privilege ranking) are injected into [`Service`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;

#[cfg(test)]
mod test_support;

pub use domain::{PasswordResetLocalClient, PrivilegeGate, Service, TenantResolver};
