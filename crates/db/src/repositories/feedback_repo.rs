//! Repository for the `feedback` table.

use resolveit_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback};

/// Column list for `feedback` queries.
const COLUMNS: &str = "id, complaint_id, citizen_name, rating, comments, created_at";

/// Provides insert and lookup operations for feedback. Feedback is never
/// updated or deleted.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a feedback row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (complaint_id, citizen_name, rating, comments, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.complaint_id)
            .bind(&input.citizen_name)
            .bind(input.rating)
            .bind(&input.comments)
            .bind(&input.created_at)
            .fetch_one(pool)
            .await
    }

    /// List all feedback rows for a complaint, natural store order.
    pub async fn list_by_complaint(
        pool: &PgPool,
        complaint_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE complaint_id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(complaint_id)
            .fetch_all(pool)
            .await
    }
}
