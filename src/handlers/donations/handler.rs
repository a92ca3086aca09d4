//! Donation handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    constants::DONATION_CREATED_POINTS,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::NewDonation,
    services::DonationService,
    state::AppState,
    utils::validation::parse_iso_date,
};

use super::{
    request::CreateDonationRequest,
    response::{CreateDonationResponse, DonorDashboardResponse},
};

/// Create a donation
pub async fn create_donation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateDonationRequest>,
) -> AppResult<(StatusCode, Json<CreateDonationResponse>)> {
    payload.validate()?;

    let expiry_date = payload.expiry_date.as_deref().map(parse_iso_date).transpose()?;

    let new = NewDonation {
        item_type: payload.item_type,
        quantity: payload.quantity,
        condition: payload.condition,
        description: payload.description,
        location: payload.location.unwrap_or_default(),
        pickup_address: payload.pickup_address,
        expiry_date,
    };

    let (donation, task, donor) = DonationService::create_donation(state.db(), &auth_user, new).await?;

    let response = CreateDonationResponse {
        message: format!("Donation created successfully! +{DONATION_CREATED_POINTS} points"),
        donation: donation.into(),
        task_id: task.id,
        points_awarded: DONATION_CREATED_POINTS,
        total_points: donor.points,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Donor dashboard
pub async fn donor_dashboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<DonorDashboardResponse>> {
    let dashboard = DonationService::donor_dashboard(state.db(), &auth_user).await?;

    Ok(Json(DonorDashboardResponse {
        donations: dashboard.donations.into_iter().map(Into::into).collect(),
        active_donations: dashboard
            .active_donations
            .into_iter()
            .map(Into::into)
            .collect(),
        completed_donations: dashboard
            .completed_donations
            .into_iter()
            .map(Into::into)
            .collect(),
        total_items_delivered: dashboard.total_items_delivered,
    }))
}
