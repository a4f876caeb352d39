use resolveit_core::attachments::AttachmentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally and the store
/// holds only its root path).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: resolveit_db::DbPool,
    /// Filesystem store for complaint and resolution images.
    pub attachments: AttachmentStore,
}
