//! Session repository (refresh tokens)

use chrono::{DateTime, Utc};
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppResult, models::Session};

/// Repository for refresh-token session rows
pub struct SessionRepository;

impl SessionRepository {
    /// Create a new session for a freshly issued refresh token
    pub async fn create(
        executor: impl PgExecutor<'_>,
        user_id: &Uuid,
        refresh_token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, refresh_token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(refresh_token)
        .bind(expires_at)
        .fetch_one(executor)
        .await?;

        Ok(session)
    }

    /// Find session by refresh token
    pub async fn find_by_token(
        executor: impl PgExecutor<'_>,
        refresh_token: &str,
    ) -> AppResult<Option<Session>> {
        let session =
            sqlx::query_as::<_, Session>(r#"SELECT * FROM sessions WHERE refresh_token = $1"#)
                .bind(refresh_token)
                .fetch_optional(executor)
                .await?;

        Ok(session)
    }

    /// Delete a single session (token rotation, single logout)
    pub async fn delete(executor: impl PgExecutor<'_>, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM sessions WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Delete all of a user's sessions (logout everywhere)
    pub async fn delete_all_for_user(
        executor: impl PgExecutor<'_>,
        user_id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM sessions WHERE user_id = $1"#)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
