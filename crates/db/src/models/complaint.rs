//! Complaint entity model and DTOs.

use resolveit_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `complaints` table.
///
/// Timestamps and deadlines are stored as strings: `deadline` is the
/// human-readable form, `deadline_iso` the machine-parseable one, and
/// nothing enforces that the two agree -- keeping them consistent is the
/// caller's responsibility.
///
/// The resolution image has no column here; it is located on disk by
/// convention from the complaint id.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: DbId,
    pub subject: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub citizen_name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub assigned_staff: Option<String>,
    pub deadline: Option<String>,
    pub deadline_iso: Option<String>,
    pub admin_comments: Option<String>,
    pub internal_notes: Option<String>,
    pub alert_message: Option<String>,
    pub last_alert_at: Option<String>,
    pub is_escalated: Option<bool>,
    pub officer_notes: Option<String>,
    pub image_path: Option<String>,
}

/// Values for inserting a newly filed complaint, defaults already applied
/// by the caller (status, assigned staff, timestamps).
#[derive(Debug)]
pub struct CreateComplaint {
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub citizen_name: String,
    pub status: String,
    pub assigned_staff: String,
    pub created_at: String,
    pub updated_at: String,
    pub image_path: Option<String>,
}

/// Sparse update payload: only non-`None` fields overwrite the row.
///
/// Subject, description, and the citizen name are fixed at creation and
/// have no counterpart here. A field that is absent from the JSON stays
/// untouched; there is no way to clear a field back to NULL through this
/// payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaint {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub assigned_staff: Option<String>,
    pub deadline: Option<String>,
    pub deadline_iso: Option<String>,
    pub admin_comments: Option<String>,
    pub internal_notes: Option<String>,
    pub alert_message: Option<String>,
    pub last_alert_at: Option<String>,
    pub is_escalated: Option<bool>,
    pub officer_notes: Option<String>,
}

/// Payload for the assignment endpoint; merges only these three fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignComplaint {
    pub assigned_staff: Option<String>,
    pub deadline: Option<String>,
    pub deadline_iso: Option<String>,
}
