#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static User Metadata Plugin
//!
//! Serves tenant and user metadata from configuration. The data is held as an
//! immutable snapshot shared by all threads; every lookup reads exactly one
//! snapshot.
//!
//! ## Configuration
//!
//! ```yaml
//! metadata:
//!   tenants:
//!     - id: "t1"
//!       name: "acme"
//!     - id: "t2"
//!       name: "globex"
//!   users:
//!     - username: "alice"
//!       tenant_id: "t1"
//!     - username: "bob"
//!       tenant_id: "t2"
//! ```

pub mod config;
pub mod domain;

pub use config::StaticMetadataPluginConfig;
pub use domain::{MetadataSnapshot, Service};
