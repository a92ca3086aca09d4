//! Task lifecycle service
//!
//! Tasks move strictly forward through created -> assigned -> picked_up ->
//! delivered, advanced only by the assigned volunteer. Every successful
//! transition appends exactly one activity log row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{DELIVERY_COMPLETED_POINTS, VOLUNTEER_COMPLETED_TASKS, VOLUNTEER_OTHER_TASKS},
    db::repositories::{
        ActivityLogRepository, DonationRepository, RequestRepository, TaskRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{ActivityLog, DonationStatus, RequestStatus, Role, Task, TaskStatus, TaskSummary},
};

/// Volunteer dashboard data
#[derive(Debug)]
pub struct VolunteerDashboard {
    /// Open tasks whose donation sits in the volunteer's location
    pub nearby_tasks: Vec<TaskSummary>,
    /// Open tasks from other locations
    pub other_tasks: Vec<TaskSummary>,
    /// The volunteer's in-flight tasks
    pub my_tasks: Vec<TaskSummary>,
    /// The volunteer's recent deliveries
    pub completed_tasks: Vec<TaskSummary>,
}

/// Task lifecycle service
pub struct TaskService;

impl TaskService {
    /// Assemble the volunteer dashboard
    pub async fn volunteer_dashboard(
        pool: &PgPool,
        actor: &AuthenticatedUser,
    ) -> AppResult<VolunteerDashboard> {
        actor.require_role(Role::Volunteer)?;

        let volunteer = UserRepository::find_by_id(pool, &actor.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let nearby_tasks = TaskRepository::list_open_by_location(pool, &volunteer.location).await?;
        let other_tasks = TaskRepository::list_open_other_locations(
            pool,
            &volunteer.location,
            VOLUNTEER_OTHER_TASKS,
        )
        .await?;
        let my_tasks = TaskRepository::list_active_by_volunteer(pool, &volunteer.id).await?;
        let completed_tasks = TaskRepository::list_delivered_by_volunteer(
            pool,
            &volunteer.id,
            VOLUNTEER_COMPLETED_TASKS,
        )
        .await?;

        Ok(VolunteerDashboard {
            nearby_tasks,
            other_tasks,
            my_tasks,
            completed_tasks,
        })
    }

    /// Accept an unassigned task.
    ///
    /// The claim is an atomic conditional update: when two volunteers race
    /// for the same task, exactly one wins and the other gets
    /// `AlreadyAssigned`.
    pub async fn accept_task(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        task_id: &Uuid,
    ) -> AppResult<Task> {
        actor.require_role(Role::Volunteer)?;

        let mut tx = pool.begin().await.map_err(AppError::from)?;

        let existing = TaskRepository::find_by_id(&mut *tx, task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {task_id} not found")))?;

        let task = TaskRepository::try_claim(&mut *tx, &existing.id, &actor.id)
            .await?
            .ok_or(AppError::AlreadyAssigned)?;

        DonationRepository::set_status(&mut *tx, &task.donation_id, DonationStatus::Matched)
            .await?;

        ActivityLogRepository::append(
            &mut *tx,
            &task.id,
            &format!("Task accepted by volunteer {}", actor.name),
            Some(&actor.id),
        )
        .await?;

        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(task_id = %task.id, volunteer_id = %actor.id, "Task accepted");

        Ok(task)
    }

    /// Advance a task's status.
    ///
    /// Only `picked_up` and `delivered` are recognized; anything else is
    /// `InvalidStatus` with no state change. The caller must be the assigned
    /// volunteer, and the move must be one step forward.
    pub async fn update_status(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        task_id: &Uuid,
        status: &str,
    ) -> AppResult<Task> {
        actor.require_role(Role::Volunteer)?;

        let next = TaskStatus::parse_update(status)
            .ok_or_else(|| AppError::InvalidStatus(status.to_string()))?;

        let mut tx = pool.begin().await.map_err(AppError::from)?;

        let task = TaskRepository::find_by_id(&mut *tx, task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {task_id} not found")))?;

        if task.volunteer_id != Some(actor.id) {
            return Err(AppError::NotOwner);
        }

        if !task.status.can_advance_to(next) {
            return Err(AppError::InvalidStatus(status.to_string()));
        }

        let (task, action) = match next {
            TaskStatus::PickedUp => {
                let task = TaskRepository::mark_picked_up(&mut *tx, &task.id).await?;
                (task, format!("Items picked up by {}", actor.name))
            }
            TaskStatus::Delivered => {
                let task = TaskRepository::mark_delivered(&mut *tx, &task.id).await?;

                DonationRepository::set_status(
                    &mut *tx,
                    &task.donation_id,
                    DonationStatus::Completed,
                )
                .await?;

                // A linked request is fulfilled by the delivery
                if let Some(request_id) = task.request_id {
                    RequestRepository::set_status(&mut *tx, &request_id, RequestStatus::Fulfilled)
                        .await?;
                }

                UserRepository::add_points(&mut *tx, &actor.id, DELIVERY_COMPLETED_POINTS).await?;

                (task, format!("Items delivered by {}", actor.name))
            }
            // parse_update only yields the two states above
            _ => return Err(AppError::InvalidStatus(status.to_string())),
        };

        ActivityLogRepository::append(&mut *tx, &task.id, &action, Some(&actor.id)).await?;

        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(task_id = %task.id, status = %task.status.as_str(), "Task status updated");

        Ok(task)
    }

    /// Task detail with its full audit trail in creation order
    pub async fn task_detail(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        task_id: &Uuid,
    ) -> AppResult<(Task, Vec<ActivityLog>)> {
        actor.require_role(Role::Volunteer)?;

        let task = TaskRepository::find_by_id(pool, task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {task_id} not found")))?;

        let logs = ActivityLogRepository::list_by_task(pool, &task.id).await?;

        Ok((task, logs))
    }
}
