//! Domain layer for the static user metadata plugin.

mod client;
pub mod service;

pub use service::{MetadataSnapshot, Service};
