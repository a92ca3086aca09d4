//! Statistics handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::StatsService,
    state::AppState,
};

use super::response::{CertificateResponse, ImpactResponse, IndexResponse, LeaderboardResponse};

/// Landing page data: platform stats and recent donations
pub async fn index(State(state): State<AppState>) -> AppResult<Json<IndexResponse>> {
    let (stats, recent_donations) = StatsService::index(state.db()).await?;

    Ok(Json(IndexResponse {
        stats,
        recent_donations: recent_donations.into_iter().map(Into::into).collect(),
    }))
}

/// Impact page data: stats, recent deliveries, and top contributors
pub async fn impact(State(state): State<AppState>) -> AppResult<Json<ImpactResponse>> {
    let report = StatsService::impact(state.db()).await?;

    Ok(Json(ImpactResponse {
        stats: report.stats,
        completed_tasks: report.completed_tasks.into_iter().map(Into::into).collect(),
        top_volunteers: report.top_volunteers.into_iter().map(Into::into).collect(),
        top_donors: report.top_donors.into_iter().map(Into::into).collect(),
    }))
}

/// Leaderboard: top volunteers and donors by points
pub async fn leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let (volunteers, donors) = StatsService::leaderboard(state.db()).await?;

    Ok(Json(LeaderboardResponse {
        volunteers: volunteers.into_iter().map(Into::into).collect(),
        donors: donors.into_iter().map(Into::into).collect(),
    }))
}

/// Certificate data for the authenticated user
pub async fn certificate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CertificateResponse>> {
    let (user, completed_count) = StatsService::certificate(state.db(), &auth_user).await?;

    Ok(Json(CertificateResponse {
        user: user.into(),
        completed_count,
    }))
}
