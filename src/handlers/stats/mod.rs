//! Public statistics and profile handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Public aggregate routes plus the authenticated certificate view
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/index", get(handler::index))
        .route("/impact", get(handler::impact))
        .route("/leaderboard", get(handler::leaderboard));

    let protected = Router::new()
        .route("/certificate", get(handler::certificate))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
