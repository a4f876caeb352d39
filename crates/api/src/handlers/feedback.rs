//! Feedback handlers: citizens rate resolved complaints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use resolveit_core::feedback::validate_rating;
use resolveit_core::types::{now_timestamp, DbId};
use resolveit_db::models::feedback::{CreateFeedback, Feedback};
use resolveit_db::repositories::FeedbackRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Request payload for submitting feedback.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedback {
    pub citizen_name: Option<String>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
}

/// POST /feedback/{complaintId}
///
/// The rating must be 1 to 5. The complaint id is recorded as given; it is
/// not checked against the complaints table, so feedback on a deleted or
/// never-existing complaint is accepted.
pub async fn create(
    State(state): State<AppState>,
    Path(complaint_id): Path<DbId>,
    Json(payload): Json<SubmitFeedback>,
) -> AppResult<Json<Feedback>> {
    let rating = validate_rating(payload.rating)?;

    let input = CreateFeedback {
        complaint_id,
        citizen_name: payload.citizen_name,
        rating,
        comments: payload.comments,
        created_at: now_timestamp(),
    };

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    Ok(Json(feedback))
}

/// GET /feedback/{complaintId}
pub async fn list_by_complaint(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list_by_complaint(&state.pool, id).await?;
    Ok(Json(feedback))
}
