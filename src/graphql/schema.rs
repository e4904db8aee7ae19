use async_graphql::*;
use sea_orm::DatabaseConnection;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(db: DatabaseConnection) -> GraphQLSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(GraphQLContext::new(db))
        .finish()
}
