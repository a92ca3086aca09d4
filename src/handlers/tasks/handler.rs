//! Task handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::DELIVERY_COMPLETED_POINTS,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::TaskStatus,
    services::TaskService,
    state::AppState,
};

use super::{
    request::UpdateTaskStatusRequest,
    response::{
        AcceptTaskResponse, TaskDetailResponse, UpdateTaskStatusResponse,
        VolunteerDashboardResponse,
    },
};

/// Volunteer dashboard
pub async fn volunteer_dashboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<VolunteerDashboardResponse>> {
    let dashboard = TaskService::volunteer_dashboard(state.db(), &auth_user).await?;

    Ok(Json(VolunteerDashboardResponse {
        nearby_tasks: dashboard.nearby_tasks.into_iter().map(Into::into).collect(),
        other_tasks: dashboard.other_tasks.into_iter().map(Into::into).collect(),
        my_tasks: dashboard.my_tasks.into_iter().map(Into::into).collect(),
        completed_tasks: dashboard
            .completed_tasks
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}

/// Accept an unassigned task
pub async fn accept_task(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AcceptTaskResponse>> {
    let task = TaskService::accept_task(state.db(), &auth_user, &id).await?;

    Ok(Json(AcceptTaskResponse {
        message: "Task accepted! Please proceed with pickup.".to_string(),
        task: task.into(),
    }))
}

/// Advance a task's status
pub async fn update_task_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskStatusRequest>,
) -> AppResult<Json<UpdateTaskStatusResponse>> {
    let task = TaskService::update_status(state.db(), &auth_user, &id, &payload.status).await?;

    let message = if task.status == TaskStatus::Delivered {
        format!("Delivery completed! +{DELIVERY_COMPLETED_POINTS} points")
    } else {
        "Task updated.".to_string()
    };

    Ok(Json(UpdateTaskStatusResponse {
        message,
        task: task.into(),
    }))
}

/// Task detail with its audit trail
pub async fn task_detail(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TaskDetailResponse>> {
    let (task, logs) = TaskService::task_detail(state.db(), &auth_user, &id).await?;

    Ok(Json(TaskDetailResponse {
        task: task.into(),
        logs: logs.into_iter().map(Into::into).collect(),
    }))
}
