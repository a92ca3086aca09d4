//! Donation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_ADDRESS_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_ITEM_QUANTITY, MAX_ITEM_TYPE_LENGTH,
    MAX_LOCATION_LENGTH,
};

/// Donation creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[validate(length(min = 1, max = MAX_ITEM_TYPE_LENGTH))]
    pub item_type: String,

    #[validate(range(min = 1, max = MAX_ITEM_QUANTITY))]
    pub quantity: i32,

    #[validate(length(max = 20))]
    pub condition: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Defaults to the donor's own location when omitted
    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_ADDRESS_LENGTH))]
    pub pickup_address: Option<String>,

    /// ISO date (YYYY-MM-DD), for perishable items
    pub expiry_date: Option<String>,
}
