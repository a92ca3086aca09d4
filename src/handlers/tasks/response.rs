//! Task response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ActivityLog, Task, TaskStatus, TaskSummary};

/// Task information in responses
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub request_id: Option<Uuid>,
    pub volunteer_id: Option<Uuid>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            donation_id: t.donation_id,
            request_id: t.request_id,
            volunteer_id: t.volunteer_id,
            status: t.status,
            created_at: t.created_at,
            assigned_at: t.assigned_at,
            picked_up_at: t.picked_up_at,
            delivered_at: t.delivered_at,
        }
    }
}

/// Task listing entry with its donation's details
#[derive(Debug, Serialize)]
pub struct TaskSummaryResponse {
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

impl From<TaskSummary> for TaskSummaryResponse {
    fn from(t: TaskSummary) -> Self {
        Self {
            id: t.id,
            donation_id: t.donation_id,
            request_id: t.request_id,
            volunteer_id: t.volunteer_id,
            status: t.status,
            created_at: t.created_at,
            delivered_at: t.delivered_at,
            item_type: t.item_type,
            quantity: t.quantity,
            location: t.location,
            pickup_address: t.pickup_address,
        }
    }
}

/// Activity log entry in responses
#[derive(Debug, Serialize)]
pub struct ActivityLogResponse {
    pub id: Uuid,
    pub action: String,
    pub actor_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            action: log.action,
            actor_id: log.actor_id,
            timestamp: log.timestamp,
        }
    }
}

/// Volunteer dashboard response
#[derive(Debug, Serialize)]
pub struct VolunteerDashboardResponse {
    pub nearby_tasks: Vec<TaskSummaryResponse>,
    pub other_tasks: Vec<TaskSummaryResponse>,
    pub my_tasks: Vec<TaskSummaryResponse>,
    pub completed_tasks: Vec<TaskSummaryResponse>,
}

/// Task acceptance response
#[derive(Debug, Serialize)]
pub struct AcceptTaskResponse {
    pub message: String,
    pub task: TaskResponse,
}

/// Task status update response
#[derive(Debug, Serialize)]
pub struct UpdateTaskStatusResponse {
    pub message: String,
    pub task: TaskResponse,
}

/// Task detail with audit trail
#[derive(Debug, Serialize)]
pub struct TaskDetailResponse {
    pub task: TaskResponse,
    pub logs: Vec<ActivityLogResponse>,
}
