//! Matching request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Connect a donation with a request
#[derive(Debug, Deserialize)]
pub struct ConnectMatchRequest {
    pub donation_id: Uuid,
    pub request_id: Uuid,
}
