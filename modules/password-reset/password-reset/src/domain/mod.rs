//! Domain layer for password reset authorization.

pub mod error;
pub mod local_client;
pub mod privilege_gate;
pub mod service;
pub mod tenant_resolver;

pub use error::DomainError;
pub use local_client::PasswordResetLocalClient;
pub use privilege_gate::PrivilegeGate;
pub use service::Service;
pub use tenant_resolver::TenantResolver;
