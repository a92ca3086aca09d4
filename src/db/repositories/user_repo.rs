//! User repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Role, User},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        executor: impl PgExecutor<'_>,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
        location: &str,
        phone: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role, location, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(location)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(executor: impl PgExecutor<'_>, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    /// Find user by email (for login and duplicate checks)
    pub async fn find_by_email(
        executor: impl PgExecutor<'_>,
        email: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    /// Add points to a user's total. Points only ever increase; callers pass
    /// positive awards.
    pub async fn add_points(
        executor: impl PgExecutor<'_>,
        id: &Uuid,
        points: i32,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET points = points + $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(points)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Top users of a role ordered by points descending
    pub async fn top_by_role(
        executor: impl PgExecutor<'_>,
        role: Role,
        limit: i64,
    ) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE role = $1
            ORDER BY points DESC
            LIMIT $2
            "#,
        )
        .bind(role)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(users)
    }

    /// Count total users
    pub async fn count(executor: impl PgExecutor<'_>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Count users of a role
    pub async fn count_by_role(executor: impl PgExecutor<'_>, role: Role) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE role = $1"#)
            .bind(role)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
