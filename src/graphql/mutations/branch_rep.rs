use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::BranchRep;

#[derive(Default)]
pub struct BranchRepMutation;

#[Object]
impl BranchRepMutation {
    /// Designate a user as representative for a branch. Admins only.
    async fn add_branch_rep(
        &self,
        ctx: &Context<'_>,
        branch_id: ID,
        user_id: ID,
    ) -> Result<BranchRep> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.current_user(ctx).await?;

        let rep = context
            .branch_rep_service
            .add_branch_rep(actor, branch_id.as_str(), user_id.as_str())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(BranchRep::from(rep))
    }
}
