//! Route definitions for the `/feedback` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST /{complaint_id}      -> create
/// GET  /{complaint_id}      -> list_by_complaint
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{complaint_id}",
        post(feedback::create).get(feedback::list_by_complaint),
    )
}
