//! Password comparison for login.
//!
//! Passwords are stored and compared in the clear. This is the single place
//! where the stored value meets the supplied one, so introducing hashing
//! later means changing this function and the signup path only.

/// Compare a supplied password against the stored one.
///
/// Both sides are trimmed first, mirroring the trim applied at signup.
pub fn passwords_match(supplied: &str, stored: &str) -> bool {
    supplied.trim() == stored.trim()
}
