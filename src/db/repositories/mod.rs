//! Database repositories
//!
//! Repositories are thin static-method wrappers around SQL. Write methods
//! accept any `PgExecutor` so services can group several writes inside one
//! transaction.

pub mod activity_log_repo;
pub mod donation_repo;
pub mod request_repo;
pub mod session_repo;
pub mod task_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepository;
pub use donation_repo::DonationRepository;
pub use request_repo::RequestRepository;
pub use session_repo::SessionRepository;
pub use task_repo::TaskRepository;
pub use user_repo::UserRepository;
