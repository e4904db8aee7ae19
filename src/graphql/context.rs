use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::{AuthSession, CurrentUser};
use crate::services::{AuthorizationService, BranchRepService, DirectoryService};

use super::errors::core_error_to_graphql_error;

#[derive(Clone)]
pub struct GraphQLContext {
    pub authorization_service: Arc<AuthorizationService>,
    pub branch_rep_service: Arc<BranchRepService>,
    pub directory_service: Arc<DirectoryService>,
}

impl GraphQLContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            authorization_service: Arc::new(AuthorizationService::new(db.clone())),
            branch_rep_service: Arc::new(BranchRepService::new(db.clone())),
            directory_service: Arc::new(DirectoryService::new(db)),
        }
    }

    /// Resolves the caller from the session token attached to the request,
    /// if any. Nothing is looked up until a resolver asks.
    pub async fn current_user(
        &self,
        ctx: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<Option<CurrentUser>> {
        let session = ctx.data_opt::<AuthSession>();
        self.authorization_service
            .current_user(session)
            .await
            .map_err(core_error_to_graphql_error)
    }
}
