/// Database primary-key type used across all entities.
pub type DbId = i64;

/// Current server time as an ISO-like local timestamp string,
/// e.g. `2026-08-30T14:03:55.123`.
///
/// Complaint and feedback timestamps are stored as strings rather than SQL
/// timestamps; the frontend renders them verbatim.
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

/// Milliseconds since the Unix epoch, used to prefix stored upload names.
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
