//! Item request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_ADDRESS_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_ITEM_QUANTITY, MAX_ITEM_TYPE_LENGTH,
    MAX_LOCATION_LENGTH,
};

/// Item request creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestRequest {
    #[validate(length(min = 1, max = MAX_ITEM_TYPE_LENGTH))]
    pub item_type: String,

    #[validate(range(min = 1, max = MAX_ITEM_QUANTITY))]
    pub quantity: i32,

    #[validate(length(max = 20))]
    pub urgency: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Defaults to the receiver's own location when omitted
    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_ADDRESS_LENGTH))]
    pub delivery_address: Option<String>,
}
