//! Item request handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::NewRequest,
    services::RequestService,
    state::AppState,
};

use super::{
    request::CreateRequestRequest,
    response::{CreateRequestResponse, ReceiverDashboardResponse},
};

/// Create an item request
pub async fn create_request(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateRequestRequest>,
) -> AppResult<(StatusCode, Json<CreateRequestResponse>)> {
    payload.validate()?;

    let new = NewRequest {
        item_type: payload.item_type,
        quantity: payload.quantity,
        urgency: payload.urgency,
        description: payload.description,
        location: payload.location.unwrap_or_default(),
        delivery_address: payload.delivery_address,
    };

    let request = RequestService::create_request(state.db(), &auth_user, new).await?;

    let response = CreateRequestResponse {
        message: "Request submitted successfully!".to_string(),
        request: request.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Receiver dashboard
pub async fn receiver_dashboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ReceiverDashboardResponse>> {
    let dashboard = RequestService::receiver_dashboard(state.db(), &auth_user).await?;

    Ok(Json(ReceiverDashboardResponse {
        requests: dashboard.requests.into_iter().map(Into::into).collect(),
        pending_requests: dashboard
            .pending_requests
            .into_iter()
            .map(Into::into)
            .collect(),
        fulfilled_requests: dashboard
            .fulfilled_requests
            .into_iter()
            .map(Into::into)
            .collect(),
        nearby_donations: dashboard
            .nearby_donations
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}
