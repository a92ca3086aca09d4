//! Donation service

use sqlx::PgPool;

use crate::{
    constants::DONATION_CREATED_POINTS,
    db::repositories::{ActivityLogRepository, DonationRepository, TaskRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Donation, NewDonation, Role, Task, User},
};

/// Donor dashboard data
#[derive(Debug)]
pub struct DonorDashboard {
    pub donations: Vec<Donation>,
    pub active_donations: Vec<Donation>,
    pub completed_donations: Vec<Donation>,
    /// Total items across completed donations
    pub total_items_delivered: i64,
}

/// Donation service
pub struct DonationService;

impl DonationService {
    /// Create a donation.
    ///
    /// Spawns the donation's fulfillment task, awards the donor points, and
    /// appends the audit entry, all in one transaction.
    pub async fn create_donation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        mut new: NewDonation,
    ) -> AppResult<(Donation, Task, User)> {
        actor.require_role(Role::Donor)?;

        let donor = UserRepository::find_by_id(pool, &actor.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // Location defaults to the donor's own
        if new.location.trim().is_empty() {
            new.location = donor.location.clone();
        }

        let mut tx = pool.begin().await.map_err(AppError::from)?;

        let donation = DonationRepository::create(&mut *tx, &donor.id, &new).await?;
        let task = TaskRepository::create(&mut *tx, &donation.id).await?;
        let donor = UserRepository::add_points(&mut *tx, &donor.id, DONATION_CREATED_POINTS).await?;
        ActivityLogRepository::append(
            &mut *tx,
            &task.id,
            &format!("Donation created by {}", donor.name),
            Some(&donor.id),
        )
        .await?;

        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(
            donation_id = %donation.id,
            task_id = %task.id,
            donor_id = %donor.id,
            "Donation created"
        );

        Ok((donation, task, donor))
    }

    /// Assemble the donor dashboard
    pub async fn donor_dashboard(
        pool: &PgPool,
        actor: &AuthenticatedUser,
    ) -> AppResult<DonorDashboard> {
        actor.require_role(Role::Donor)?;

        let donations = DonationRepository::list_by_donor(pool, &actor.id).await?;

        let (completed_donations, active_donations): (Vec<Donation>, Vec<Donation>) = donations
            .iter()
            .cloned()
            .partition(|d| d.status == crate::models::DonationStatus::Completed);

        let total_items_delivered = completed_donations
            .iter()
            .map(|d| i64::from(d.quantity))
            .sum();

        Ok(DonorDashboard {
            donations,
            active_donations,
            completed_donations,
            total_items_delivered,
        })
    }
}
