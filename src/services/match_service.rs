//! Matching service
//!
//! Matching is exact equality on (location, item_type) between `available`
//! donations and `pending` requests. No fuzzy matching, no ranking: all
//! exact matches are returned, grouped by the actor's own record.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        ActivityLogRepository, DonationRepository, RequestRepository, TaskRepository,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Donation, DonationStatus, ItemRequest, RequestStatus, Role, Task},
};

/// One of a donor's available donations with every pending request that
/// matches it exactly
#[derive(Debug)]
pub struct DonationMatches {
    pub donation: Donation,
    pub requests: Vec<ItemRequest>,
}

/// One of a receiver's pending requests with every available donation that
/// matches it exactly
#[derive(Debug)]
pub struct RequestMatches {
    pub request: ItemRequest,
    pub donations: Vec<Donation>,
}

/// Role-specific match listing
#[derive(Debug)]
pub enum MatchListing {
    Donor(Vec<DonationMatches>),
    Receiver(Vec<RequestMatches>),
}

/// Matching service
pub struct MatchService;

impl MatchService {
    /// Match listing for the actor's open records. Groups with no
    /// counterpart are omitted. Volunteers are not matchers; they consume
    /// already-created tasks from their dashboard instead.
    pub async fn list_matches(pool: &PgPool, actor: &AuthenticatedUser) -> AppResult<MatchListing> {
        match actor.role {
            Role::Donor => {
                let my_donations =
                    DonationRepository::list_available_by_donor(pool, &actor.id).await?;

                let mut matches = Vec::new();
                for donation in my_donations {
                    let requests = RequestRepository::list_pending_matching(
                        pool,
                        &donation.location,
                        &donation.item_type,
                    )
                    .await?;

                    if !requests.is_empty() {
                        matches.push(DonationMatches { donation, requests });
                    }
                }

                Ok(MatchListing::Donor(matches))
            }
            Role::Receiver => {
                let my_requests =
                    RequestRepository::list_pending_by_receiver(pool, &actor.id).await?;

                let mut matches = Vec::new();
                for request in my_requests {
                    let donations = DonationRepository::list_available_matching(
                        pool,
                        &request.location,
                        &request.item_type,
                    )
                    .await?;

                    if !donations.is_empty() {
                        matches.push(RequestMatches { request, donations });
                    }
                }

                Ok(MatchListing::Receiver(matches))
            }
            Role::Volunteer => Err(AppError::AccessDenied(Role::Volunteer)),
        }
    }

    /// Connect a donation with a request.
    ///
    /// Reuses the donation's existing task or creates one, links the request,
    /// and marks both records matched. The caller is trusted to have picked
    /// the pair from the match listing; item_type/location agreement is not
    /// re-checked here.
    pub async fn connect(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        donation_id: &Uuid,
        request_id: &Uuid,
    ) -> AppResult<(Task, Donation, ItemRequest)> {
        let mut tx = pool.begin().await.map_err(AppError::from)?;

        let donation = DonationRepository::find_by_id(&mut *tx, donation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donation {donation_id} not found")))?;
        let request = RequestRepository::find_by_id(&mut *tx, request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {request_id} not found")))?;

        let task = match TaskRepository::find_by_donation(&mut *tx, &donation.id).await? {
            Some(task) => task,
            None => TaskRepository::create(&mut *tx, &donation.id).await?,
        };

        let task = TaskRepository::set_request(&mut *tx, &task.id, &request.id).await?;
        let donation =
            DonationRepository::set_status(&mut *tx, &donation.id, DonationStatus::Matched).await?;
        let request =
            RequestRepository::set_status(&mut *tx, &request.id, RequestStatus::Matched).await?;

        ActivityLogRepository::append(
            &mut *tx,
            &task.id,
            &format!("Donation matched with request by {}", actor.name),
            Some(&actor.id),
        )
        .await?;

        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(
            task_id = %task.id,
            donation_id = %donation.id,
            request_id = %request.id,
            "Match connected"
        );

        Ok((task, donation, request))
    }
}
