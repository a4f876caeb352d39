//! Login credential checking.

pub mod password;
