//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod activity_log;
pub mod donation;
pub mod request;
pub mod session;
pub mod task;
pub mod user;

pub use activity_log::*;
pub use donation::*;
pub use request::*;
pub use session::*;
pub use task::*;
pub use user::*;
