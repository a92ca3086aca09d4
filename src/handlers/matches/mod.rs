//! Matching handlers

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

/// Matching routes (donor or receiver)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_matches))
        .route("/connect", post(handler::connect_match))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
