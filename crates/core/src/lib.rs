//! Domain logic for the ResolveIT complaint-tracking backend.
//!
//! This crate is independent of the HTTP and persistence layers: it holds
//! the error taxonomy, the complaint lifecycle constants and
//! attachment-naming policy, the filesystem attachment store, feedback
//! validation, account normalization, and the CSV export dialect.

pub mod account;
pub mod attachments;
pub mod complaint;
pub mod error;
pub mod export;
pub mod feedback;
pub mod types;
