//! Item request handlers

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

/// Item request routes (receiver-gated)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_request))
        .route("/dashboard", get(handler::receiver_dashboard))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
