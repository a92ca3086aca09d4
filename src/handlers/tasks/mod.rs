//! Task handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Task routes (volunteer-gated)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handler::volunteer_dashboard))
        .route("/{id}", get(handler::task_detail))
        .route("/{id}/accept", post(handler::accept_task))
        .route("/{id}/status", post(handler::update_task_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
