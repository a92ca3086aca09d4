//! Statistics response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::{auth::UserResponse, donations::DonationResponse, tasks::TaskSummaryResponse},
    models::{Badge, User},
    services::stats_service::PlatformStats,
};

/// Landing page response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub stats: PlatformStats,
    pub recent_donations: Vec<DonationResponse>,
}

/// Leaderboard entry
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub points: i32,
    pub badges: Vec<Badge>,
}

impl From<User> for LeaderboardEntry {
    fn from(user: User) -> Self {
        let badges = user.badges();
        Self {
            id: user.id,
            name: user.name,
            location: user.location,
            points: user.points,
            badges,
        }
    }
}

/// Impact page response
#[derive(Debug, Serialize)]
pub struct ImpactResponse {
    pub stats: PlatformStats,
    pub completed_tasks: Vec<TaskSummaryResponse>,
    pub top_volunteers: Vec<LeaderboardEntry>,
    pub top_donors: Vec<LeaderboardEntry>,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub volunteers: Vec<LeaderboardEntry>,
    pub donors: Vec<LeaderboardEntry>,
}

/// Certificate response
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub user: UserResponse,
    /// Delivered tasks for volunteers, completed donations for donors
    pub completed_count: i64,
}
