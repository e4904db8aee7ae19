pub mod app;
pub mod handlers;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::config::ServerConfig;
use crate::database::{connection::*, migrations::Migrator};
use anyhow::Result;
use sea_orm_migration::prelude::*;
use tracing::info;

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let database_url = get_database_url(Some(&config.database));
    let db = establish_connection(&database_url).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    let app = app::create_app(db, config.cors_origin.as_deref()).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");

    #[cfg(feature = "graphql")]
    {
        info!("  /graphql                    - GraphQL API & Playground");
        info!("  Authenticate with 'Authorization: Bearer <session>' or 'x-session-id'");
    }
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
