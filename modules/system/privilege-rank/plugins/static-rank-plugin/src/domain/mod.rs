//! Domain layer for the static privilege rank plugin.

mod client;
pub mod service;

pub use service::{Rank, Service};
