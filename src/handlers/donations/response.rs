//! Donation response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Donation, DonationStatus};

/// Donation information in responses
#[derive(Debug, Serialize)]
pub struct DonationResponse {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub item_type: String,
    pub quantity: i32,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub location: String,
    pub pickup_address: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Donation> for DonationResponse {
    fn from(d: Donation) -> Self {
        Self {
            id: d.id,
            donor_id: d.donor_id,
            item_type: d.item_type,
            quantity: d.quantity,
            condition: d.condition,
            description: d.description,
            location: d.location,
            pickup_address: d.pickup_address,
            expiry_date: d.expiry_date,
            status: d.status,
            created_at: d.created_at,
        }
    }
}

/// Donation creation response
#[derive(Debug, Serialize)]
pub struct CreateDonationResponse {
    pub message: String,
    pub donation: DonationResponse,
    /// The fulfillment task spawned for this donation
    pub task_id: Uuid,
    pub points_awarded: i32,
    pub total_points: i32,
}

/// Donor dashboard response
#[derive(Debug, Serialize)]
pub struct DonorDashboardResponse {
    pub donations: Vec<DonationResponse>,
    pub active_donations: Vec<DonationResponse>,
    pub completed_donations: Vec<DonationResponse>,
    pub total_items_delivered: i64,
}
