use crate::database::entities::users::{self, UserRole};
use crate::errors::AuthError;

/// Session token presented with a request, before it has been checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession(pub String);

impl AuthSession {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads a token from an `Authorization: Bearer ...` value or from a
    /// bare session id. Blank values and a bare `Bearer` yield `None`.
    pub fn from_header_value(value: &str) -> Option<Self> {
        let value = value.trim();
        let token = match value.get(..6) {
            Some(scheme)
                if scheme.eq_ignore_ascii_case("bearer")
                    && value[6..].chars().next().map_or(true, char::is_whitespace) =>
            {
                value[6..].trim()
            }
            _ => value,
        };

        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }
}

/// The identity a request acts as.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub user: users::Model,
}

impl CurrentUser {
    pub fn new(user: users::Model) -> Self {
        Self { user }
    }

    pub fn id(&self) -> i32 {
        self.user.id
    }

    pub fn role(&self) -> &str {
        &self.user.role
    }

    /// Fails with `PermissionDenied` unless the user holds `role`.
    pub fn require_role(&self, role: UserRole) -> Result<(), AuthError> {
        if self.role() == role.as_str() {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied)
        }
    }
}

/// Turns an optional resolved identity into an authenticated one.
pub fn require_authenticated(user: Option<CurrentUser>) -> Result<CurrentUser, AuthError> {
    user.ok_or(AuthError::NotAuthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> CurrentUser {
        CurrentUser::new(users::Model {
            id: 1,
            email: "a@example.com".to_string(),
            display_name: "A".to_string(),
            role: role.to_string(),
            is_active: true,
            created_at: chrono::Utc::now(),
        })
    }

    #[test]
    fn parses_bearer_and_bare_tokens() {
        assert_eq!(
            AuthSession::from_header_value("Bearer sess_abc"),
            Some(AuthSession("sess_abc".to_string()))
        );
        assert_eq!(
            AuthSession::from_header_value("bearer   sess_abc "),
            Some(AuthSession("sess_abc".to_string()))
        );
        assert_eq!(
            AuthSession::from_header_value("sess_abc"),
            Some(AuthSession("sess_abc".to_string()))
        );
        assert_eq!(AuthSession::from_header_value(""), None);
    }

    #[test]
    fn bare_bearer_scheme_is_not_a_token() {
        assert_eq!(AuthSession::from_header_value("Bearer "), None);
        assert_eq!(AuthSession::from_header_value("Bearer"), None);
        assert_eq!(AuthSession::from_header_value("  bearer \t "), None);
        assert_eq!(
            AuthSession::from_header_value("Bearerless"),
            Some(AuthSession("Bearerless".to_string()))
        );
    }

    #[test]
    fn role_checks_are_exact() {
        assert!(user_with_role("ADMIN").require_role(UserRole::Admin).is_ok());
        assert!(matches!(
            user_with_role("USER").require_role(UserRole::Admin),
            Err(AuthError::PermissionDenied)
        ));
        assert!(matches!(
            user_with_role("admin").require_role(UserRole::Admin),
            Err(AuthError::PermissionDenied)
        ));
    }

    #[test]
    fn missing_identity_is_not_authenticated() {
        assert!(matches!(
            require_authenticated(None),
            Err(AuthError::NotAuthenticated)
        ));
        assert!(require_authenticated(Some(user_with_role("USER"))).is_ok());
    }
}
