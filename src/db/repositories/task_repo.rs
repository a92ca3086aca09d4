//! Task repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Task, TaskSummary},
};

/// Columns for task listings joined with their donation
const TASK_SUMMARY_COLUMNS: &str = r#"
    t.id, t.donation_id, t.request_id, t.volunteer_id, t.status,
    t.created_at, t.delivered_at,
    d.item_type, d.quantity, d.location, d.pickup_address
"#;

/// Repository for task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task for a donation (status starts at `created`)
    pub async fn create(executor: impl PgExecutor<'_>, donation_id: &Uuid) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (donation_id)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(donation_id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    /// Find task by ID
    pub async fn find_by_id(executor: impl PgExecutor<'_>, id: &Uuid) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(r#"SELECT * FROM tasks WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(task)
    }

    /// First task created for a donation, if any
    pub async fn find_by_donation(
        executor: impl PgExecutor<'_>,
        donation_id: &Uuid,
    ) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE donation_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(donation_id)
        .fetch_optional(executor)
        .await?;

        Ok(task)
    }

    /// Link a request to a task
    pub async fn set_request(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
        request_id: &Uuid,
    ) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET request_id = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request_id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    /// Atomically claim an unassigned task for a volunteer.
    ///
    /// The `volunteer_id IS NULL` condition makes acceptance a compare-and-set:
    /// when two volunteers race, exactly one row update wins and the loser
    /// gets `None` back.
    pub async fn try_claim(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
        volunteer_id: &Uuid,
    ) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET volunteer_id = $2, status = 'assigned', assigned_at = NOW()
            WHERE id = $1 AND volunteer_id IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(volunteer_id)
        .fetch_optional(executor)
        .await?;

        Ok(task)
    }

    /// Mark a task picked up, stamping `picked_up_at`
    pub async fn mark_picked_up(executor: impl PgExecutor<'_>, id: &Uuid) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = 'picked_up', picked_up_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    /// Mark a task delivered, stamping `delivered_at`
    pub async fn mark_delivered(executor: impl PgExecutor<'_>, id: &Uuid) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = 'delivered', delivered_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    /// Unassigned open tasks whose donation sits in the given location
    pub async fn list_open_by_location(
        executor: impl PgExecutor<'_>,
        location: &str,
    ) -> AppResult<Vec<TaskSummary>> {
        let tasks = sqlx::query_as::<_, TaskSummary>(&format!(
            r#"
            SELECT {TASK_SUMMARY_COLUMNS}
            FROM tasks t
            JOIN donations d ON d.id = t.donation_id
            WHERE t.status = 'created' AND t.volunteer_id IS NULL AND d.location = $1
            ORDER BY t.created_at DESC
            "#
        ))
        .bind(location)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// Unassigned open tasks from any other location
    pub async fn list_open_other_locations(
        executor: impl PgExecutor<'_>,
        location: &str,
        limit: i64,
    ) -> AppResult<Vec<TaskSummary>> {
        let tasks = sqlx::query_as::<_, TaskSummary>(&format!(
            r#"
            SELECT {TASK_SUMMARY_COLUMNS}
            FROM tasks t
            JOIN donations d ON d.id = t.donation_id
            WHERE t.status = 'created' AND t.volunteer_id IS NULL AND d.location <> $1
            ORDER BY t.created_at DESC
            LIMIT $2
            "#
        ))
        .bind(location)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// A volunteer's in-flight tasks (assigned or picked up)
    pub async fn list_active_by_volunteer(
        executor: impl PgExecutor<'_>,
        volunteer_id: &Uuid,
    ) -> AppResult<Vec<TaskSummary>> {
        let tasks = sqlx::query_as::<_, TaskSummary>(&format!(
            r#"
            SELECT {TASK_SUMMARY_COLUMNS}
            FROM tasks t
            JOIN donations d ON d.id = t.donation_id
            WHERE t.volunteer_id = $1 AND t.status IN ('assigned', 'picked_up')
            ORDER BY t.created_at DESC
            "#
        ))
        .bind(volunteer_id)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// A volunteer's delivered tasks, most recent deliveries first
    pub async fn list_delivered_by_volunteer(
        executor: impl PgExecutor<'_>,
        volunteer_id: &Uuid,
        limit: i64,
    ) -> AppResult<Vec<TaskSummary>> {
        let tasks = sqlx::query_as::<_, TaskSummary>(&format!(
            r#"
            SELECT {TASK_SUMMARY_COLUMNS}
            FROM tasks t
            JOIN donations d ON d.id = t.donation_id
            WHERE t.volunteer_id = $1 AND t.status = 'delivered'
            ORDER BY t.delivered_at DESC
            LIMIT $2
            "#
        ))
        .bind(volunteer_id)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// Most recently delivered tasks across the platform
    pub async fn list_recent_delivered(
        executor: impl PgExecutor<'_>,
        limit: i64,
    ) -> AppResult<Vec<TaskSummary>> {
        let tasks = sqlx::query_as::<_, TaskSummary>(&format!(
            r#"
            SELECT {TASK_SUMMARY_COLUMNS}
            FROM tasks t
            JOIN donations d ON d.id = t.donation_id
            WHERE t.status = 'delivered'
            ORDER BY t.delivered_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// Count all delivered tasks
    pub async fn count_delivered(executor: impl PgExecutor<'_>) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM tasks WHERE status = 'delivered'"#)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Count a volunteer's delivered tasks (for certificates)
    pub async fn count_delivered_by_volunteer(
        executor: impl PgExecutor<'_>,
        volunteer_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM tasks WHERE volunteer_id = $1 AND status = 'delivered'"#,
        )
        .bind(volunteer_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}
