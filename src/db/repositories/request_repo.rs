//! Item request repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ItemRequest, NewRequest, RequestStatus},
};

/// Repository for item request database operations
pub struct RequestRepository;

impl RequestRepository {
    /// Create a new request (status starts at `pending`)
    pub async fn create(
        executor: impl PgExecutor<'_>,
        receiver_id: &Uuid,
        new: &NewRequest,
    ) -> AppResult<ItemRequest> {
        let request = sqlx::query_as::<_, ItemRequest>(
            r#"
            INSERT INTO requests
                (receiver_id, item_type, quantity, urgency, description,
                 location, delivery_address)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(receiver_id)
        .bind(&new.item_type)
        .bind(new.quantity)
        .bind(&new.urgency)
        .bind(&new.description)
        .bind(&new.location)
        .bind(&new.delivery_address)
        .fetch_one(executor)
        .await?;

        Ok(request)
    }

    /// Find request by ID
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
    ) -> AppResult<Option<ItemRequest>> {
        let request = sqlx::query_as::<_, ItemRequest>(r#"SELECT * FROM requests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(request)
    }

    /// All requests by a receiver, newest first
    pub async fn list_by_receiver(
        executor: impl PgExecutor<'_>,
        receiver_id: &Uuid,
    ) -> AppResult<Vec<ItemRequest>> {
        let requests = sqlx::query_as::<_, ItemRequest>(
            r#"
            SELECT * FROM requests
            WHERE receiver_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(receiver_id)
        .fetch_all(executor)
        .await?;

        Ok(requests)
    }

    /// A receiver's still-pending requests (the receiver side of matching)
    pub async fn list_pending_by_receiver(
        executor: impl PgExecutor<'_>,
        receiver_id: &Uuid,
    ) -> AppResult<Vec<ItemRequest>> {
        let requests = sqlx::query_as::<_, ItemRequest>(
            r#"
            SELECT * FROM requests
            WHERE receiver_id = $1 AND status = 'pending'
            ORDER BY created_at DESC
            "#,
        )
        .bind(receiver_id)
        .fetch_all(executor)
        .await?;

        Ok(requests)
    }

    /// Pending requests matching a donation's exact (location, item_type)
    pub async fn list_pending_matching(
        executor: impl PgExecutor<'_>,
        location: &str,
        item_type: &str,
    ) -> AppResult<Vec<ItemRequest>> {
        let requests = sqlx::query_as::<_, ItemRequest>(
            r#"
            SELECT * FROM requests
            WHERE status = 'pending' AND location = $1 AND item_type = $2
            "#,
        )
        .bind(location)
        .bind(item_type)
        .fetch_all(executor)
        .await?;

        Ok(requests)
    }

    /// Advance request status
    pub async fn set_status(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
        status: RequestStatus,
    ) -> AppResult<ItemRequest> {
        let request = sqlx::query_as::<_, ItemRequest>(
            r#"
            UPDATE requests
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(request)
    }
}
