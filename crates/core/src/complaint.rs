//! Complaint lifecycle constants and attachment-naming policy.

use crate::types::DbId;

/// Status assigned to every newly filed complaint.
pub const STATUS_UNDER_REVIEW: &str = "Under Review";

/// Placeholder staff value shown until an officer is assigned.
pub const NOT_ASSIGNED: &str = "Not assigned";

/// Derive the stored filename for a citizen-uploaded image.
///
/// Whitespace runs in the original name collapse to a single underscore; a
/// missing or empty name falls back to the literal `img`. The epoch-millis
/// prefix keeps repeated uploads of the same filename apart, though two
/// uploads landing in the same millisecond can still collide.
pub fn original_image_name(epoch_millis: i64, original: Option<&str>) -> String {
    let safe = match original {
        Some(name) if !name.is_empty() => collapse_whitespace(name),
        _ => "img".to_string(),
    };
    format!("{epoch_millis}_{safe}")
}

/// Fixed single-slot filename for a complaint's resolution image.
///
/// A re-upload for the same complaint overwrites the previous proof; no
/// history is kept.
pub fn resolution_image_name(id: DbId) -> String {
    format!("resolution_{id}")
}

fn collapse_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
