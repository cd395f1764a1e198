#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! User Metadata SDK
//!
//! This crate provides the public API for tenant/user metadata lookups:
//!
//! - [`UserMetadataClient`] - Lookup trait implemented by metadata providers
//! - [`TenantInfo`], [`UserInfo`] - Metadata models
//! - [`UserMetadataError`] - Error types

pub mod api;
pub mod error;
pub mod models;

pub use api::UserMetadataClient;
pub use error::UserMetadataError;
pub use models::{TenantInfo, UserInfo};
