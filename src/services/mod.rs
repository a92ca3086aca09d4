//! Business logic services

pub mod auth_service;
pub mod donation_service;
pub mod match_service;
pub mod request_service;
pub mod stats_service;
pub mod task_service;

pub use auth_service::AuthService;
pub use donation_service::DonationService;
pub use match_service::MatchService;
pub use request_service::RequestService;
pub use stats_service::StatsService;
pub use task_service::TaskService;
