#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Privilege Rank Plugin
//!
//! Ranks identities with a fixed three-level policy:
//!
//! - the super identity (`root`) outranks everyone
//! - configured tenant admins outrank ordinary members
//! - an identity is equal to itself; peers lack authority over each other
//!
//! ## Configuration
//!
//! ```yaml
//! ranking:
//!   tenant_admins: ["admin", "ops"]
//! ```

pub mod config;
pub mod domain;

pub use config::StaticRankPluginConfig;
pub use domain::{Rank, Service};
