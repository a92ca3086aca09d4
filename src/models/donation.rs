//! Donation model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Donation status; advances monotonically forward, never backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Available,
    Matched,
    Completed,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Matched => "matched",
            Self::Completed => "completed",
        }
    }
}

/// Fields for inserting a new donation
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub item_type: String,
    pub quantity: i32,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub location: String,
    pub pickup_address: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

/// Donation database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Donation {
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
