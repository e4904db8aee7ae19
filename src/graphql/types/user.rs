use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::users;

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            email: model.email,
            display_name: model.display_name,
            role: model.role,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
