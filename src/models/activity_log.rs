//! Activity log model
//!
//! Append-only audit trail. Rows are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Activity log database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,
    pub task_id: Uuid,
    pub action: String,
    pub actor_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}
