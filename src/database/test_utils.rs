#[cfg(test)]
use sea_orm::DatabaseConnection;

#[cfg(test)]
pub async fn setup_test_db() -> DatabaseConnection {
    let db = crate::database::connection::establish_connection("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    crate::database::connection::setup_database(&db)
        .await
        .expect("Failed to run migrations");

    db
}
