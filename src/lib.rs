//! GiveBridge - Donation Matching Platform
//!
//! This library provides the core functionality for the GiveBridge platform,
//! a donation-matching service connecting donors, volunteers, and receivers
//! through a request/fulfillment workflow.
//!
//! # Features
//!
//! - Role-based accounts (donor, volunteer, receiver)
//! - Exact-match pairing of donations and requests by location and item type
//! - Linear task lifecycle driven by volunteers (accept, pick up, deliver)
//! - Points and badge tiers for donors and volunteers
//! - On-demand platform statistics, leaderboard, and impact views
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
