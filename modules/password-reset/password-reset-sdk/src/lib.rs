#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Password Reset SDK
//!
//! This crate provides the public API for the `password_reset` module:
//!
//! - [`PasswordResetClient`] - Public API trait for statement executors
//! - [`ResetPassword`], [`Statement`] - Inbound statement models
//! - [`AuthorizedChangeRequest`], [`AnalyzedStatement`] - Authorized output
//! - [`PasswordResetError`], [`ErrorKind`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use password_reset_sdk::{PasswordResetClient, ResetPassword};
//!
//! let request = client.process(&operator, ResetPassword::new("bob@t2", "s3cret"))?;
//! executor.apply(request.target(), request.new_password());
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::PasswordResetClient;
pub use error::{ErrorKind, PasswordResetError};
pub use models::{AnalyzedStatement, AuthorizedChangeRequest, ResetPassword, Statement};
