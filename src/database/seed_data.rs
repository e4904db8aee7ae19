use anyhow::Result;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{branches, user_sessions, users};
use crate::database::entities::users::UserRole;

/// What `create_example_data` inserted, including a ready-to-use admin
/// session token.
#[derive(Debug, Clone)]
pub struct ExampleData {
    pub admin: users::Model,
    pub member: users::Model,
    pub branches: Vec<branches::Model>,
    pub admin_session: String,
}

pub async fn create_example_data(db: &DatabaseConnection) -> Result<Option<ExampleData>> {
    let existing_admin = users::Entity::find()
        .filter(users::Column::Email.eq("admin@example.com"))
        .one(db)
        .await?;

    if existing_admin.is_some() {
        info!("Example data already exists, skipping seed data creation");
        return Ok(None);
    }

    info!("Creating example users and branches");

    let admin = users::ActiveModel::new(
        "admin@example.com".to_string(),
        "Example Admin".to_string(),
        UserRole::Admin,
    )
    .insert(db)
    .await?;

    let member = users::ActiveModel::new(
        "member@example.com".to_string(),
        "Example Member".to_string(),
        UserRole::User,
    )
    .insert(db)
    .await?;

    let mut created = Vec::new();
    for name in ["Head Office", "North", "South"] {
        let branch = branches::ActiveModel::new(name.to_string()).insert(db).await?;
        info!("Created branch {} with ID: {}", branch.name, branch.id);
        created.push(branch);
    }

    let session = user_sessions::ActiveModel::new(admin.id, 24).insert(db).await?;

    info!(
        "Successfully created example data ({} branches)",
        created.len()
    );

    Ok(Some(ExampleData {
        admin,
        member,
        branches: created,
        admin_session: session.session_id,
    }))
}
