//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Display name minimum length
pub const MIN_NAME_LENGTH: u64 = 1;

/// Display name maximum length
pub const MAX_NAME_LENGTH: u64 = 100;

// =============================================================================
// POINTS & BADGES
// =============================================================================

/// Points awarded to a donor for creating a donation
pub const DONATION_CREATED_POINTS: i32 = 10;

/// Points awarded to a volunteer for completing a delivery
pub const DELIVERY_COMPLETED_POINTS: i32 = 15;

/// Badge thresholds, ascending. A user holds every badge whose threshold
/// their point total meets.
pub mod badge_thresholds {
    pub const BRONZE: i32 = 10;
    pub const SILVER: i32 = 50;
    pub const GOLD: i32 = 100;
    pub const PLATINUM: i32 = 200;
}

// =============================================================================
// LISTING LIMITS
// =============================================================================

/// Recent donations shown on the index page
pub const INDEX_RECENT_DONATIONS: i64 = 5;

/// Delivered tasks shown on the impact page
pub const IMPACT_RECENT_DELIVERIES: i64 = 20;

/// Top users per role on the impact page
pub const IMPACT_TOP_USERS: i64 = 10;

/// Top users per role on the leaderboard
pub const LEADERBOARD_TOP_USERS: i64 = 20;

/// Open tasks from other locations shown on the volunteer dashboard
pub const VOLUNTEER_OTHER_TASKS: i64 = 10;

/// Completed tasks shown on the volunteer dashboard
pub const VOLUNTEER_COMPLETED_TASKS: i64 = 10;

/// Nearby available donations shown on the receiver dashboard
pub const RECEIVER_NEARBY_DONATIONS: i64 = 10;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum item quantity per donation or request
pub const MAX_ITEM_QUANTITY: i32 = 100_000;

/// Maximum location string length
pub const MAX_LOCATION_LENGTH: u64 = 100;

/// Maximum item type string length
pub const MAX_ITEM_TYPE_LENGTH: u64 = 50;

/// Maximum free-text description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Maximum address string length
pub const MAX_ADDRESS_LENGTH: u64 = 200;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
