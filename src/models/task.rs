//! Task model and lifecycle state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Task lifecycle status.
///
/// The lifecycle is strictly linear: created -> assigned -> picked_up ->
/// delivered. `Verified` is declared in the schema as a reserved future
/// state; no transition reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Created,
    Assigned,
    PickedUp,
    Delivered,
    Verified,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Assigned => "assigned",
            Self::PickedUp => "picked_up",
            Self::Delivered => "delivered",
            Self::Verified => "verified",
        }
    }

    /// Parse a volunteer-supplied status update. Only the two states a
    /// volunteer can drive a task into are recognized here; `created`,
    /// `assigned`, and `verified` are not valid update targets.
    pub fn parse_update(s: &str) -> Option<Self> {
        match s {
            "picked_up" => Some(Self::PickedUp),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Whether a task may move from `self` to `next`. Transitions are only
    /// ever one step forward.
    pub fn can_advance_to(&self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Assigned)
                | (Self::Assigned, Self::PickedUp)
                | (Self::PickedUp, Self::Delivered)
        )
    }
}

/// Task database model
///
/// Links one donation (required) to at most one request and at most one
/// volunteer. Each status transition stamps the corresponding timestamp.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub request_id: Option<Uuid>,
    pub volunteer_id: Option<Uuid>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Task row joined with the donation it fulfills, for volunteer-facing
/// listings and the impact page
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub request_id: Option<Uuid>,
    pub volunteer_id: Option<Uuid>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub item_type: String,
    pub quantity: i32,
    pub location: String,
    pub pickup_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert!(TaskStatus::Created.can_advance_to(TaskStatus::Assigned));
        assert!(TaskStatus::Assigned.can_advance_to(TaskStatus::PickedUp));
        assert!(TaskStatus::PickedUp.can_advance_to(TaskStatus::Delivered));
    }

    #[test]
    fn test_no_skipping_or_backward() {
        assert!(!TaskStatus::Created.can_advance_to(TaskStatus::PickedUp));
        assert!(!TaskStatus::Assigned.can_advance_to(TaskStatus::Delivered));
        assert!(!TaskStatus::Delivered.can_advance_to(TaskStatus::PickedUp));
        assert!(!TaskStatus::PickedUp.can_advance_to(TaskStatus::Assigned));
    }

    #[test]
    fn test_verified_is_unreachable() {
        assert!(!TaskStatus::Delivered.can_advance_to(TaskStatus::Verified));
        assert_eq!(TaskStatus::parse_update("verified"), None);
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(TaskStatus::parse_update("picked_up"), Some(TaskStatus::PickedUp));
        assert_eq!(TaskStatus::parse_update("delivered"), Some(TaskStatus::Delivered));
        assert_eq!(TaskStatus::parse_update("assigned"), None);
        assert_eq!(TaskStatus::parse_update("banana"), None);
    }
}
