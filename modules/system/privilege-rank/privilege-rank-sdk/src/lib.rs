#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Privilege Rank SDK
//!
//! This crate provides the public API for privilege ranking policies:
//!
//! - [`PrivilegeRankClient`] - Ordering over identities by administrative authority
//!
//! The ordering contract is the only thing callers rely on; the rule table
//! behind it is supplied by a plugin.

pub mod api;

pub use api::{PrivilegeRankClient, is_authorized};
