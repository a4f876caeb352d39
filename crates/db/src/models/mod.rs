//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Input structs for inserts and (where applicable) sparse updates
//!
//! Entity JSON uses camelCase field names to match the wire format the
//! frontends already consume.

pub mod complaint;
pub mod feedback;
pub mod user;
