//! Item request response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::donations::DonationResponse,
    models::{ItemRequest, RequestStatus},
};

/// Item request information in responses
#[derive(Debug, Serialize)]
pub struct RequestResponse {
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

impl From<ItemRequest> for RequestResponse {
    fn from(r: ItemRequest) -> Self {
        Self {
            id: r.id,
            receiver_id: r.receiver_id,
            item_type: r.item_type,
            quantity: r.quantity,
            urgency: r.urgency,
            description: r.description,
            location: r.location,
            delivery_address: r.delivery_address,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

/// Request creation response
#[derive(Debug, Serialize)]
pub struct CreateRequestResponse {
    pub message: String,
    pub request: RequestResponse,
}

/// Receiver dashboard response
#[derive(Debug, Serialize)]
pub struct ReceiverDashboardResponse {
    pub requests: Vec<RequestResponse>,
    pub pending_requests: Vec<RequestResponse>,
    pub fulfilled_requests: Vec<RequestResponse>,
    /// Available donations in the receiver's location
    pub nearby_donations: Vec<DonationResponse>,
}
