//! Activity log repository
//!
//! The log is append-only: there is deliberately no update or delete here.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppResult, models::ActivityLog};

/// Repository for activity log database operations
pub struct ActivityLogRepository;

impl ActivityLogRepository {
    /// Append an audit entry for a task action
    pub async fn append(
        executor: impl PgExecutor<'_>,
        task_id: &Uuid,
        action: &str,
        actor_id: Option<&Uuid>,
    ) -> AppResult<ActivityLog> {
        let log = sqlx::query_as::<_, ActivityLog>(
            r#"
            INSERT INTO activity_logs (task_id, action, actor_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(task_id)
        .bind(action)
        .bind(actor_id)
        .fetch_one(executor)
        .await?;

        Ok(log)
    }

    /// All entries for a task in ascending timestamp order
    pub async fn list_by_task(
        executor: impl PgExecutor<'_>,
        task_id: &Uuid,
    ) -> AppResult<Vec<ActivityLog>> {
        let logs = sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT * FROM activity_logs
            WHERE task_id = $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(executor)
        .await?;

        Ok(logs)
    }
}
