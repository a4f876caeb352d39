//! HTTP handlers, grouped by resource.

pub mod complaints;
pub mod feedback;
pub mod users;
