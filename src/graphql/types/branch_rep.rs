use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::branch_reps;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::{Branch, User};

/// A user's designation as representative for a branch.
///
/// `branch` and `user` are only fetched when selected.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct BranchRep {
    pub id: ID,
    pub branch_id: ID,
    pub user_id: ID,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub branch_key: i32,
    #[graphql(skip)]
    pub user_key: i32,
}

impl From<branch_reps::Model> for BranchRep {
    fn from(model: branch_reps::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            branch_id: ID::from(model.branch_id.to_string()),
            user_id: ID::from(model.user_id.to_string()),
            created_at: model.created_at,
            branch_key: model.branch_id,
            user_key: model.user_id,
        }
    }
}

#[ComplexObject]
impl BranchRep {
    async fn branch(&self, ctx: &Context<'_>) -> Result<Option<Branch>> {
        let context = ctx.data::<GraphQLContext>()?;
        let branch = context
            .directory_service
            .find_branch(self.branch_key)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(branch.map(Branch::from))
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context
            .directory_service
            .find_user(self.user_key)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(user.map(User::from))
    }
}
