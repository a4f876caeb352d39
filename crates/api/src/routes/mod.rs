pub mod complaints;
pub mod feedback;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree, mounted at the root.
///
/// ```text
/// /health                      service and database health
///
/// /complaints                  file (multipart), list
/// /complaints/export/csv       CSV download
/// /complaints/citizen/{name}   complaints filed by a citizen
/// /complaints/officer/{name}   complaints assigned to a staff member
/// /complaints/{id}             get, update, delete
/// /complaints/{id}/assign      assignment merge (PUT)
/// /complaints/{id}/image       citizen photo (GET)
/// /complaints/{id}/resolution-image   officer proof (POST, GET)
///
/// /feedback/{complaint_id}     submit rating (POST), list (GET)
///
/// /users                       create account (POST)
/// /users/login                 check credentials (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/complaints", complaints::router())
        .nest("/feedback", feedback::router())
        .nest("/users", users::router())
}
