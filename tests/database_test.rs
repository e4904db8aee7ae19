//! Database functionality tests
//!
//! Tests for migrations, entity operations, and relation integrity

use anyhow::Result;
use branchrep::database::entities::users::UserRole;
use branchrep::database::entities::*;
use branchrep::database::setup_database;
use branchrep::database::migrations::Migrator;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter,
};
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    assert!(branches::Entity::find().all(&db).await?.is_empty());
    assert!(users::Entity::find().all(&db).await?.is_empty());
    assert!(branch_reps::Entity::find().all(&db).await?.is_empty());
    assert!(user_sessions::Entity::find().all(&db).await?.is_empty());

    // Down then up again leaves an empty, usable schema
    Migrator::down(&db, None).await?;
    Migrator::up(&db, None).await?;
    assert!(branches::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_branch_rep_relations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let user = users::ActiveModel::new(
        "rep@example.com".to_string(),
        "Rep".to_string(),
        UserRole::User,
    )
    .insert(&db)
    .await?;
    let branch = branches::ActiveModel::new("East".to_string()).insert(&db).await?;
    let rep = branch_reps::ActiveModel::connect(branch.id, user.id)
        .insert(&db)
        .await?;

    let linked_branch = rep.find_related(branches::Entity).one(&db).await?;
    assert_eq!(linked_branch.map(|b| b.id), Some(branch.id));

    let linked_user = rep.find_related(users::Entity).one(&db).await?;
    assert_eq!(linked_user.map(|u| u.id), Some(user.id));

    let reps = branch.find_related(branch_reps::Entity).all(&db).await?;
    assert_eq!(reps.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_deleting_branch_removes_its_reps() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let user = users::ActiveModel::new(
        "rep@example.com".to_string(),
        "Rep".to_string(),
        UserRole::User,
    )
    .insert(&db)
    .await?;
    let branch = branches::ActiveModel::new("West".to_string()).insert(&db).await?;
    branch_reps::ActiveModel::connect(branch.id, user.id)
        .insert(&db)
        .await?;

    branches::Entity::delete_by_id(branch.id).exec(&db).await?;

    let remaining = branch_reps::Entity::find()
        .filter(branch_reps::Column::BranchId.eq(branch.id))
        .all(&db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_rep_for_missing_user_is_rejected() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let branch = branches::ActiveModel::new("South".to_string()).insert(&db).await?;
    let result = branch_reps::ActiveModel::connect(branch.id, 12345)
        .insert(&db)
        .await;

    assert!(result.is_err());
    Ok(())
}
