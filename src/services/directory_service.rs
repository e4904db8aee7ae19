use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::database::entities::users::UserRole;
use crate::database::entities::{branches, users};
use crate::errors::{CoreError, CoreResult};

/// Branch and user records backing the branch-rep links.
#[derive(Clone, Debug)]
pub struct DirectoryService {
    db: DatabaseConnection,
}

impl DirectoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_branch(&self, name: &str) -> CoreResult<branches::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("Branch name cannot be empty"));
        }

        branches::ActiveModel::new(name.to_string())
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::database("branches::insert", e))
    }

    pub async fn find_branch(&self, id: i32) -> CoreResult<Option<branches::Model>> {
        branches::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("branches::find_by_id", e))
    }

    pub async fn list_branches(&self) -> CoreResult<Vec<branches::Model>> {
        branches::Entity::find()
            .order_by_asc(branches::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::database("branches::find", e))
    }

    pub async fn create_user(
        &self,
        email: &str,
        display_name: &str,
        role: UserRole,
    ) -> CoreResult<users::Model> {
        if !email.contains('@') {
            return Err(CoreError::validation(format!("Invalid email: {}", email)));
        }

        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("users::find (email)", e))?;

        if existing.is_some() {
            return Err(CoreError::conflict("User with this email already exists"));
        }

        users::ActiveModel::new(email.to_string(), display_name.to_string(), role)
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::database("users::insert", e))
    }

    pub async fn find_user(&self, id: i32) -> CoreResult<Option<users::Model>> {
        users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("users::find_by_id", e))
    }
}
