//! Error types for the branch representative service
//!
//! - **CoreError**: kind + message + optional fields, returned by services
//! - **AuthError**: authentication and authorisation failures
//!
//! Services return [`CoreResult`]; the GraphQL layer maps [`CoreErrorKind`]
//! onto `extensions.code` values.

pub mod auth;
pub mod core_error;

pub use auth::AuthError;
pub use core_error::{CoreError, CoreErrorKind};

/// Result type alias for service operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
