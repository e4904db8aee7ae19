use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLSchema};

use super::handlers::health;

#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)] // Reserved for REST endpoints
    pub db: DatabaseConnection,
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        db: db.clone(),
        #[cfg(feature = "graphql")]
        graphql_schema: build_schema(db),
    };

    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::OPTIONS,
    ];

    let cors = match cors_origin {
        Some("*") | None => CorsLayer::new().allow_origin(Any),
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
    }
    .allow_methods(methods)
    .allow_headers(Any)
    .allow_credentials(false);

    #[allow(unused_mut)]
    let mut app = Router::new().route("/health", get(health::health_check));

    #[cfg(feature = "graphql")]
    {
        use super::handlers::graphql::{graphql_handler, graphql_playground};

        app = app.route(
            "/graphql",
            get(graphql_playground)
                .post(graphql_handler)
                .options(|| async { axum::http::StatusCode::OK }),
        );
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
