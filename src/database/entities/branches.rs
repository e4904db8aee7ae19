use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::branch_reps::Entity")]
    BranchReps,
}

impl Related<super::branch_reps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchReps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(name: String) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: Set(name),
            created_at: Set(chrono::Utc::now()),
        }
    }
}
