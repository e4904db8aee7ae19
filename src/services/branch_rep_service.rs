use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, info};

use crate::auth::{require_authenticated, CurrentUser};
use crate::database::entities::users::UserRole;
use crate::database::entities::{branch_reps, branches};
use crate::errors::{CoreError, CoreResult};

/// Coerces an opaque API id into a numeric key.
pub fn parse_id(field: &str, raw: &str) -> CoreResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        CoreError::validation(format!("Invalid {}: '{}' is not a numeric id", field, raw))
    })
}

#[derive(Clone, Debug)]
pub struct BranchRepService {
    db: DatabaseConnection,
}

impl BranchRepService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links `user_id` to `branch_id` as a branch representative.
    ///
    /// Checks run in order and stop at the first failure: the caller must be
    /// authenticated, must be `ADMIN`, and the branch must exist. Only then
    /// is a single row inserted. The user id is passed straight to the
    /// insert; an unknown user surfaces as whatever the data layer reports.
    pub async fn add_branch_rep(
        &self,
        actor: Option<CurrentUser>,
        branch_id: &str,
        user_id: &str,
    ) -> CoreResult<branch_reps::Model> {
        debug!("addBranchRep branch_id={} user_id={}", branch_id, user_id);

        let actor = require_authenticated(actor)?;
        actor.require_role(UserRole::Admin)?;

        let branch_key = parse_id("branchId", branch_id)?;
        let user_key = parse_id("userId", user_id)?;

        branches::Entity::find_by_id(branch_key)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("branches::find_by_id", e))?
            .ok_or_else(|| CoreError::not_found("Branch", branch_id.trim()))?;

        let rep = branch_reps::ActiveModel::connect(branch_key, user_key)
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::database("branch_reps::insert", e))?;

        info!(
            "User {} added rep {} (branch {}, user {})",
            actor.id(),
            rep.id,
            rep.branch_id,
            rep.user_id
        );

        Ok(rep)
    }

    pub async fn find(&self, id: i32) -> CoreResult<Option<branch_reps::Model>> {
        branch_reps::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::database("branch_reps::find_by_id", e))
    }

    /// All reps ordered by id, optionally restricted to one branch.
    pub async fn list(&self, branch_id: Option<i32>) -> CoreResult<Vec<branch_reps::Model>> {
        let mut query = branch_reps::Entity::find();
        if let Some(branch_id) = branch_id {
            query = query.filter(branch_reps::Column::BranchId.eq(branch_id));
        }

        query
            .order_by_asc(branch_reps::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::database("branch_reps::find", e))
    }
}
