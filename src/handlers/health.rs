//! Health check handlers

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// Health check endpoint. Pings the database so load balancers see a
/// degraded status when the store is unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match db::test_connection(state.db()).await {
        Ok(()) => "up".to_string(),
        Err(_) => "down".to_string(),
    };

    let status = if database == "up" { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
