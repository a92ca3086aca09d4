//! Item request service

use sqlx::PgPool;

use crate::{
    constants::RECEIVER_NEARBY_DONATIONS,
    db::repositories::{DonationRepository, RequestRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Donation, ItemRequest, NewRequest, RequestStatus, Role},
};

/// Receiver dashboard data
#[derive(Debug)]
pub struct ReceiverDashboard {
    pub requests: Vec<ItemRequest>,
    pub pending_requests: Vec<ItemRequest>,
    pub fulfilled_requests: Vec<ItemRequest>,
    /// Available donations in the receiver's location
    pub nearby_donations: Vec<Donation>,
}

/// Item request service
pub struct RequestService;

impl RequestService {
    /// Create an item request. No points and no task: a task only exists
    /// once a donation is in play.
    pub async fn create_request(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        mut new: NewRequest,
    ) -> AppResult<ItemRequest> {
        actor.require_role(Role::Receiver)?;

        let receiver = UserRepository::find_by_id(pool, &actor.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // Location defaults to the receiver's own
        if new.location.trim().is_empty() {
            new.location = receiver.location.clone();
        }

        let request = RequestRepository::create(pool, &receiver.id, &new).await?;

        tracing::info!(
            request_id = %request.id,
            receiver_id = %receiver.id,
            "Request created"
        );

        Ok(request)
    }

    /// Assemble the receiver dashboard
    pub async fn receiver_dashboard(
        pool: &PgPool,
        actor: &AuthenticatedUser,
    ) -> AppResult<ReceiverDashboard> {
        actor.require_role(Role::Receiver)?;

        let receiver = UserRepository::find_by_id(pool, &actor.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let requests = RequestRepository::list_by_receiver(pool, &receiver.id).await?;

        let pending_requests = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect();
        let fulfilled_requests = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Fulfilled)
            .cloned()
            .collect();

        let nearby_donations = DonationRepository::list_available_by_location(
            pool,
            &receiver.location,
            RECEIVER_NEARBY_DONATIONS,
        )
        .await?;

        Ok(ReceiverDashboard {
            requests,
            pending_requests,
            fulfilled_requests,
            nearby_donations,
        })
    }
}
