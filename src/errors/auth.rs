//! Authentication and authorisation error types
//!
//! Failures raised while turning a request's session token into an acting
//! user, and while checking that user's role.
//!
//! ```rust
//! use branchrep::errors::{AuthError, CoreErrorKind};
//!
//! let err = AuthError::PermissionDenied;
//! assert_eq!(err.to_string(), "No Permission");
//! assert_eq!(branchrep::errors::CoreError::from(err).kind(), CoreErrorKind::Forbidden);
//! ```

use thiserror::Error;

use super::CoreError;

/// Authentication and authorisation errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No identity could be resolved for the request
    #[error("Not Authenticated")]
    NotAuthenticated,

    /// Identity resolved but lacks the required role
    #[error("No Permission")]
    PermissionDenied,

    /// Session token is unknown or has been deactivated
    #[error("Session not found")]
    SessionNotFound,

    /// Session has expired
    #[error("Session expired")]
    SessionExpired,

    /// Account is deactivated
    #[error("Account is deactivated")]
    AccountDeactivated,

    /// Role text does not name a known role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AuthError {
    /// Check if this is an authentication error (401)
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::SessionNotFound | AuthError::SessionExpired
        )
    }

    /// Check if this is an authorisation error (403)
    pub fn is_authorisation_error(&self) -> bool {
        matches!(
            self,
            AuthError::PermissionDenied | AuthError::AccountDeactivated
        )
    }
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(db) => CoreError::database("auth", db),
            other if other.is_authentication_error() => CoreError::unauthorized(other.to_string()),
            other if other.is_authorisation_error() => CoreError::forbidden(other.to_string()),
            other => CoreError::validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreErrorKind;

    #[test]
    fn categories() {
        assert!(AuthError::NotAuthenticated.is_authentication_error());
        assert!(AuthError::SessionExpired.is_authentication_error());
        assert!(AuthError::PermissionDenied.is_authorisation_error());
        assert!(!AuthError::PermissionDenied.is_authentication_error());
    }

    #[test]
    fn converts_to_core_error_kinds() {
        let err: CoreError = AuthError::NotAuthenticated.into();
        assert_eq!(err.kind(), CoreErrorKind::Unauthorized);
        assert_eq!(err.message(), "Not Authenticated");

        let err: CoreError = AuthError::InvalidRole("ROOT".to_string()).into();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
    }
}
