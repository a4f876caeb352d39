//! Feedback entity model and DTOs.

use resolveit_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `feedback` table.
///
/// `complaint_id` is not FK-constrained: rows may reference complaints
/// that never existed or were deleted, and more than one row per complaint
/// is allowed.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: DbId,
    pub complaint_id: DbId,
    pub citizen_name: Option<String>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub created_at: Option<String>,
}

/// Values for inserting a citizen's feedback, rating already validated.
#[derive(Debug)]
pub struct CreateFeedback {
    pub complaint_id: DbId,
    pub citizen_name: Option<String>,
    pub rating: i32,
    pub comments: Option<String>,
    pub created_at: String,
}
