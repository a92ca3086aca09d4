//! Matching handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::MatchService,
    state::AppState,
};

use super::{
    request::ConnectMatchRequest,
    response::{ConnectMatchResponse, MatchListingResponse},
};

/// List exact matches for the actor's open records
pub async fn list_matches(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MatchListingResponse>> {
    let listing = MatchService::list_matches(state.db(), &auth_user).await?;

    Ok(Json(listing.into()))
}

/// Connect a donation with a request
pub async fn connect_match(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ConnectMatchRequest>,
) -> AppResult<Json<ConnectMatchResponse>> {
    let (task, donation, request) = MatchService::connect(
        state.db(),
        &auth_user,
        &payload.donation_id,
        &payload.request_id,
    )
    .await?;

    Ok(Json(ConnectMatchResponse {
        message: "Match created! A volunteer can now pick this up.".to_string(),
        task: task.into(),
        donation: donation.into(),
        request: request.into(),
    }))
}
