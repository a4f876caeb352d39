//! Route definitions for the `/complaints` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// POST   /                         -> create (multipart)
/// GET    /                         -> list_all
/// GET    /export/csv               -> export_csv
/// GET    /citizen/{name}           -> list_by_citizen
/// GET    /officer/{name}           -> list_by_officer
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// PUT    /{id}/assign              -> assign
/// GET    /{id}/image               -> get_image
/// POST   /{id}/resolution-image    -> upload_resolution_image (multipart)
/// GET    /{id}/resolution-image    -> get_resolution_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(complaints::create).get(complaints::list_all))
        .route("/export/csv", get(complaints::export_csv))
        .route("/citizen/{name}", get(complaints::list_by_citizen))
        .route("/officer/{name}", get(complaints::list_by_officer))
        .route(
            "/{id}",
            get(complaints::get_by_id)
                .put(complaints::update)
                .delete(complaints::delete),
        )
        .route("/{id}/assign", put(complaints::assign))
        .route("/{id}/image", get(complaints::get_image))
        .route(
            "/{id}/resolution-image",
            post(complaints::upload_resolution_image).get(complaints::get_resolution_image),
        )
}
