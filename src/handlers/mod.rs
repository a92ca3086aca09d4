//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod donations;
pub mod health;
pub mod matches;
pub mod requests;
pub mod stats;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(stats::routes(state.clone()))
        .nest("/auth", auth::routes(state.clone()))
        .nest("/donations", donations::routes(state.clone()))
        .nest("/requests", requests::routes(state.clone()))
        .nest("/tasks", tasks::routes(state.clone()))
        .nest("/matches", matches::routes(state))
}
