//! Item request model
//!
//! Named `ItemRequest` to stay clear of HTTP request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request status; advances monotonically forward, never backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Matched,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Matched => "matched",
            Self::Fulfilled => "fulfilled",
        }
    }
}

/// Fields for inserting a new request
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub item_type: String,
    pub quantity: i32,
    pub urgency: Option<String>,
    pub description: Option<String>,
    pub location: String,
    pub delivery_address: Option<String>,
}

/// Item request database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: Uuid,
    pub receiver_id: Uuid,
    pub item_type: String,
    pub quantity: i32,
    pub urgency: Option<String>,
    pub description: Option<String>,
    pub location: String,
    pub delivery_address: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}
