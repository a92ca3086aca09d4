//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_LOCATION_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    /// One of "donor", "volunteer", "receiver"
    pub role: String,

    #[validate(length(min = 1, max = MAX_LOCATION_LENGTH))]
    pub location: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    /// Invalidate this specific refresh token
    pub refresh_token: Option<String>,

    /// Invalidate all sessions if true
    pub all_sessions: Option<bool>,
}
