//! Donation handlers

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

/// Donation routes (donor-gated)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_donation))
        .route("/dashboard", get(handler::donor_dashboard))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
