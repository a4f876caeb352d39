//! Validation for citizen feedback on resolved complaints.

use crate::error::CoreError;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Validate a citizen rating. Absent or out-of-range ratings are rejected.
///
/// The rated complaint is not checked for existence; feedback rows may
/// reference ids that were never created or have been deleted.
pub fn validate_rating(rating: Option<i32>) -> Result<i32, CoreError> {
    match rating {
        Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r),
        Some(r) => Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {r}"
        ))),
        None => Err(CoreError::Validation("rating is required".into())),
    }
}
