//! Platform statistics and public aggregate views
//!
//! Everything here is recomputed from current store state on every call.
//! Nothing is cached or incrementally maintained.

use serde::Serialize;
use sqlx::PgPool;

use crate::{
    constants::{
        IMPACT_RECENT_DELIVERIES, IMPACT_TOP_USERS, INDEX_RECENT_DONATIONS, LEADERBOARD_TOP_USERS,
    },
    db::repositories::{DonationRepository, TaskRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Donation, Role, TaskSummary, User},
};

/// Platform-wide aggregate counters
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    pub total_donations: i64,
    pub completed_deliveries: i64,
    pub total_users: i64,
    pub total_volunteers: i64,
    /// Sum of quantity over donations whose task reached `delivered`
    pub items_donated: i64,
}

/// Impact page data
#[derive(Debug)]
pub struct ImpactReport {
    pub stats: PlatformStats,
    pub completed_tasks: Vec<TaskSummary>,
    pub top_volunteers: Vec<User>,
    pub top_donors: Vec<User>,
}

/// Statistics service
pub struct StatsService;

impl StatsService {
    /// Compute platform statistics from current store state
    pub async fn platform_stats(pool: &PgPool) -> AppResult<PlatformStats> {
        let total_donations = DonationRepository::count(pool).await?;
        let completed_deliveries = TaskRepository::count_delivered(pool).await?;
        let total_users = UserRepository::count(pool).await?;
        let total_volunteers = UserRepository::count_by_role(pool, Role::Volunteer).await?;
        let items_donated = DonationRepository::items_donated(pool).await?;

        Ok(PlatformStats {
            total_donations,
            completed_deliveries,
            total_users,
            total_volunteers,
            items_donated,
        })
    }

    /// Landing page data: stats plus the most recent donations
    pub async fn index(pool: &PgPool) -> AppResult<(PlatformStats, Vec<Donation>)> {
        let stats = Self::platform_stats(pool).await?;
        let recent_donations = DonationRepository::list_recent(pool, INDEX_RECENT_DONATIONS).await?;

        Ok((stats, recent_donations))
    }

    /// Impact page data: stats, recent deliveries, and top contributors
    pub async fn impact(pool: &PgPool) -> AppResult<ImpactReport> {
        let stats = Self::platform_stats(pool).await?;
        let completed_tasks =
            TaskRepository::list_recent_delivered(pool, IMPACT_RECENT_DELIVERIES).await?;
        let top_volunteers =
            UserRepository::top_by_role(pool, Role::Volunteer, IMPACT_TOP_USERS).await?;
        let top_donors = UserRepository::top_by_role(pool, Role::Donor, IMPACT_TOP_USERS).await?;

        Ok(ImpactReport {
            stats,
            completed_tasks,
            top_volunteers,
            top_donors,
        })
    }

    /// Leaderboard: top volunteers and donors by points
    pub async fn leaderboard(pool: &PgPool) -> AppResult<(Vec<User>, Vec<User>)> {
        let volunteers =
            UserRepository::top_by_role(pool, Role::Volunteer, LEADERBOARD_TOP_USERS).await?;
        let donors = UserRepository::top_by_role(pool, Role::Donor, LEADERBOARD_TOP_USERS).await?;

        Ok((volunteers, donors))
    }

    /// Certificate data: the actor plus their completed contribution count
    pub async fn certificate(pool: &PgPool, actor: &AuthenticatedUser) -> AppResult<(User, i64)> {
        let user = UserRepository::find_by_id(pool, &actor.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let completed_count = match user.role {
            Role::Volunteer => TaskRepository::count_delivered_by_volunteer(pool, &user.id).await?,
            Role::Donor => DonationRepository::count_completed_by_donor(pool, &user.id).await?,
            Role::Receiver => 0,
        };

        Ok((user, completed_count))
    }
}
