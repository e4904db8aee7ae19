use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::branches;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::BranchRep;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Branch {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub key: i32,
}

impl From<branches::Model> for Branch {
    fn from(model: branches::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            created_at: model.created_at,
            key: model.id,
        }
    }
}

#[ComplexObject]
impl Branch {
    /// Representatives linked to this branch
    async fn reps(&self, ctx: &Context<'_>) -> Result<Vec<BranchRep>> {
        let context = ctx.data::<GraphQLContext>()?;
        let reps = context
            .branch_rep_service
            .list(Some(self.key))
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(reps.into_iter().map(BranchRep::from).collect())
    }
}
