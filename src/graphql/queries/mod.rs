use async_graphql::*;

use crate::auth::CurrentUser;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::{core_error_to_graphql_error, StructuredError};
use crate::graphql::types::{Branch, BranchRep, User};
use crate::services::branch_rep_service::parse_id;

#[derive(Default)]
pub struct Query;

async fn require_user(context: &GraphQLContext, ctx: &Context<'_>) -> Result<CurrentUser> {
    context
        .current_user(ctx)
        .await?
        .ok_or_else(|| StructuredError::unauthorized("Not Authenticated"))
}

fn parse_key(field: &str, id: &ID) -> Result<i32> {
    parse_id(field, id.as_str()).map_err(|e| StructuredError::validation(field, e.message()))
}

#[Object]
impl Query {
    /// The user the request is authenticated as, if any
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context.current_user(ctx).await?;
        Ok(user.map(|current| User::from(current.user)))
    }

    /// Get a specific branch by ID
    async fn branch(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Branch>> {
        let context = ctx.data::<GraphQLContext>()?;
        require_user(context, ctx).await?;

        let key = parse_key("id", &id)?;
        let branch = context
            .directory_service
            .find_branch(key)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(branch.map(Branch::from))
    }

    /// Get all branches
    async fn branches(&self, ctx: &Context<'_>) -> Result<Vec<Branch>> {
        let context = ctx.data::<GraphQLContext>()?;
        require_user(context, ctx).await?;

        let branches = context
            .directory_service
            .list_branches()
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(branches.into_iter().map(Branch::from).collect())
    }

    /// Get branch representatives, optionally for a single branch
    async fn branch_reps(&self, ctx: &Context<'_>, branch_id: Option<ID>) -> Result<Vec<BranchRep>> {
        let context = ctx.data::<GraphQLContext>()?;
        require_user(context, ctx).await?;

        let branch_key = branch_id
            .as_ref()
            .map(|id| parse_key("branchId", id))
            .transpose()?;

        let reps = context
            .branch_rep_service
            .list(branch_key)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(reps.into_iter().map(BranchRep::from).collect())
    }
}
