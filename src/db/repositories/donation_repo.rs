//! Donation repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Donation, DonationStatus, NewDonation},
};

/// Repository for donation database operations
pub struct DonationRepository;

impl DonationRepository {
    /// Create a new donation (status starts at `available`)
    pub async fn create(
        executor: impl PgExecutor<'_>,
        donor_id: &Uuid,
        new: &NewDonation,
    ) -> AppResult<Donation> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations
                (donor_id, item_type, quantity, condition, description,
                 location, pickup_address, expiry_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(donor_id)
        .bind(&new.item_type)
        .bind(new.quantity)
        .bind(&new.condition)
        .bind(&new.description)
        .bind(&new.location)
        .bind(&new.pickup_address)
        .bind(new.expiry_date)
        .fetch_one(executor)
        .await?;

        Ok(donation)
    }

    /// Find donation by ID
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
    ) -> AppResult<Option<Donation>> {
        let donation = sqlx::query_as::<_, Donation>(r#"SELECT * FROM donations WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(donation)
    }

    /// All donations by a donor, newest first
    pub async fn list_by_donor(
        executor: impl PgExecutor<'_>,
        donor_id: &Uuid,
    ) -> AppResult<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT * FROM donations
            WHERE donor_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(donor_id)
        .fetch_all(executor)
        .await?;

        Ok(donations)
    }

    /// A donor's still-available donations (the donor side of matching)
    pub async fn list_available_by_donor(
        executor: impl PgExecutor<'_>,
        donor_id: &Uuid,
    ) -> AppResult<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT * FROM donations
            WHERE donor_id = $1 AND status = 'available'
            ORDER BY created_at DESC
            "#,
        )
        .bind(donor_id)
        .fetch_all(executor)
        .await?;

        Ok(donations)
    }

    /// Available donations matching a request's exact (location, item_type)
    pub async fn list_available_matching(
        executor: impl PgExecutor<'_>,
        location: &str,
        item_type: &str,
    ) -> AppResult<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT * FROM donations
            WHERE status = 'available' AND location = $1 AND item_type = $2
            "#,
        )
        .bind(location)
        .bind(item_type)
        .fetch_all(executor)
        .await?;

        Ok(donations)
    }

    /// Available donations in a location, newest first
    pub async fn list_available_by_location(
        executor: impl PgExecutor<'_>,
        location: &str,
        limit: i64,
    ) -> AppResult<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT * FROM donations
            WHERE status = 'available' AND location = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(location)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(donations)
    }

    /// Most recent donations across the platform
    pub async fn list_recent(executor: impl PgExecutor<'_>, limit: i64) -> AppResult<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT * FROM donations
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(donations)
    }

    /// Advance donation status
    pub async fn set_status(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
        status: DonationStatus,
    ) -> AppResult<Donation> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            UPDATE donations
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(donation)
    }

    /// Count all donations
    pub async fn count(executor: impl PgExecutor<'_>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM donations"#)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Count a donor's completed donations (for certificates)
    pub async fn count_completed_by_donor(
        executor: impl PgExecutor<'_>,
        donor_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM donations WHERE donor_id = $1 AND status = 'completed'"#,
        )
        .bind(donor_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Sum of quantity over donations whose task reached `delivered`
    pub async fn items_donated(executor: impl PgExecutor<'_>) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(d.quantity), 0)::BIGINT
            FROM donations d
            WHERE EXISTS (
                SELECT 1 FROM tasks t
                WHERE t.donation_id = d.id AND t.status = 'delivered'
            )
            "#,
        )
        .fetch_one(executor)
        .await?;

        Ok(total)
    }
}
