use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::HeaderMap;

use crate::auth::AuthSession;
use crate::server::app::AppState;

pub const SESSION_HEADER: &str = "x-session-id";

/// Session token from `Authorization`, falling back to `x-session-id`.
pub fn session_from_headers(headers: &HeaderMap) -> Option<AuthSession> {
    [axum::http::header::AUTHORIZATION.as_str(), SESSION_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name))
        .filter_map(|value| value.to_str().ok())
        .find_map(AuthSession::from_header_value)
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match session_from_headers(&headers) {
        Some(session) => request = request.data(session),
        None => tracing::debug!("GraphQL request without session"),
    }

    let response = state.graphql_schema.execute(request).await;
    if response.is_err() {
        tracing::debug!("GraphQL request completed with {} error(s)", response.errors.len());
    }
    response.into()
}

pub async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
