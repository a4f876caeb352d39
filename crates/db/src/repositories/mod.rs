//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod complaint_repo;
pub mod feedback_repo;
pub mod user_repo;

pub use complaint_repo::ComplaintRepo;
pub use feedback_repo::FeedbackRepo;
pub use user_repo::UserRepo;
