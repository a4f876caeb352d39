//! User account model and DTOs.

use resolveit_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
///
/// The password is stored and serialized in plaintext, matching the wire
/// format existing clients consume. See `resolveit_api::auth::password`
/// for the comparison seam where a hashed scheme would slot in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Values for inserting a new account, normalization already applied.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
