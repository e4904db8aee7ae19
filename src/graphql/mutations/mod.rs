// Mutation root. Each functional area contributes one object merged here.

mod branch_rep;

use async_graphql::*;

#[derive(Default, MergedObject)]
pub struct Mutation(pub branch_rep::BranchRepMutation);
