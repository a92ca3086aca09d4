//! Task request DTOs

use serde::Deserialize;

/// Task status update request. The status string is parsed by the service;
/// anything but "picked_up" or "delivered" is rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: String,
}
