use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use crate::auth::{AuthSession, CurrentUser};
use crate::database::entities::{user_sessions, users};
use crate::errors::{AuthError, AuthResult, CoreError, CoreResult};

/// Resolves session tokens to users.
#[derive(Clone, Debug)]
pub struct AuthorizationService {
    db: DatabaseConnection,
}

impl AuthorizationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current user for an optional session token.
    ///
    /// Anything short of a live session for an active user resolves to
    /// `None`; only data-layer failures are errors.
    pub async fn current_user(&self, session: Option<&AuthSession>) -> CoreResult<Option<CurrentUser>> {
        let Some(session) = session else {
            return Ok(None);
        };

        match self.get_user_from_session(session.as_str()).await {
            Ok(user) => Ok(Some(CurrentUser::new(user))),
            Err(AuthError::Database(err)) => Err(CoreError::database("user_sessions::find", err)),
            Err(err) => {
                debug!("Session did not resolve to a user: {}", err);
                Ok(None)
            }
        }
    }

    /// Get user from session ID
    pub async fn get_user_from_session(&self, session_id: &str) -> AuthResult<users::Model> {
        let session = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionId.eq(session_id))
            .filter(user_sessions::Column::IsActive.eq(true))
            .one(&self.db)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired() {
            return Err(AuthError::SessionExpired);
        }

        let user = users::Entity::find_by_id(session.user_id)
            .one(&self.db)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if !user.is_active {
            return Err(AuthError::AccountDeactivated);
        }

        Ok(user)
    }

    /// Opens a session for `user_id` lasting `hours`.
    pub async fn issue_session(&self, user_id: i32, hours: i64) -> CoreResult<user_sessions::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("users::find_by_id", e))?
            .ok_or_else(|| CoreError::not_found("User", user_id.to_string()))?;

        user_sessions::ActiveModel::new(user_id, hours)
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::database("user_sessions::insert", e))
    }

    /// Deactivates a session. Returns false when the token is unknown.
    pub async fn revoke_session(&self, session_id: &str) -> CoreResult<bool> {
        let session = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionId.eq(session_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("user_sessions::find", e))?;

        let Some(session) = session else {
            return Ok(false);
        };

        let session: user_sessions::ActiveModel = session.into();
        session
            .deactivate()
            .update(&self.db)
            .await
            .map_err(|e| CoreError::database("user_sessions::update", e))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::users::UserRole;
    use crate::database::test_utils::setup_test_db;
    use crate::errors::CoreErrorKind;
    use chrono::Utc;
    use sea_orm::Set;

    async fn seed_user(db: &DatabaseConnection, email: &str, is_active: bool) -> users::Model {
        let mut user = users::ActiveModel::new(email.to_string(), email.to_string(), UserRole::User);
        user.is_active = Set(is_active);
        user.insert(db).await.expect("Failed to insert user")
    }

    #[tokio::test]
    async fn resolves_live_session() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db.clone());
        let user = seed_user(&db, "rep@example.com", true).await;

        let session = service.issue_session(user.id, 1).await.expect("session");
        let current = service
            .current_user(Some(&AuthSession(session.session_id)))
            .await
            .expect("lookup")
            .expect("resolved");

        assert_eq!(current.id(), user.id);
        assert_eq!(current.role(), "USER");
    }

    #[tokio::test]
    async fn missing_or_unknown_tokens_resolve_to_none() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db);

        assert!(service.current_user(None).await.expect("lookup").is_none());
        assert!(service
            .current_user(Some(&AuthSession("sess_missing".to_string())))
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn expired_session_is_rejected() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db.clone());
        let user = seed_user(&db, "old@example.com", true).await;

        let mut session = user_sessions::ActiveModel::new(user.id, 1);
        session.expires_at = Set(Utc::now() - chrono::Duration::minutes(5));
        let session = session.insert(&db).await.expect("insert");

        let result = service.get_user_from_session(&session.session_id).await;
        assert!(matches!(result, Err(AuthError::SessionExpired)));
    }

    #[tokio::test]
    async fn inactive_user_is_rejected() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db.clone());
        let user = seed_user(&db, "gone@example.com", false).await;
        let session = service.issue_session(user.id, 1).await.expect("session");

        let result = service.get_user_from_session(&session.session_id).await;
        assert!(matches!(result, Err(AuthError::AccountDeactivated)));
    }

    #[tokio::test]
    async fn revoked_session_no_longer_resolves() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db.clone());
        let user = seed_user(&db, "rep@example.com", true).await;
        let session = service.issue_session(user.id, 1).await.expect("session");

        assert!(service.revoke_session(&session.session_id).await.expect("revoke"));
        assert!(!service.revoke_session("sess_missing").await.expect("revoke"));

        let result = service.get_user_from_session(&session.session_id).await;
        assert!(matches!(result, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn issuing_for_unknown_user_fails() {
        let db = setup_test_db().await;
        let service = AuthorizationService::new(db);

        let err = service.issue_session(999, 1).await.expect_err("unknown user");
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert!(err.message().contains("999"));
    }
}
