//! Repository for the `complaints` table.

use resolveit_core::types::DbId;
use sqlx::PgPool;

use crate::models::complaint::{AssignComplaint, Complaint, CreateComplaint, UpdateComplaint};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, subject, description, category, priority, citizen_name, status, \
    created_at, updated_at, assigned_staff, deadline, deadline_iso, \
    admin_comments, internal_notes, alert_message, last_alert_at, \
    is_escalated, officer_notes, image_path";

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a newly filed complaint, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateComplaint) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints \
                (subject, description, category, priority, citizen_name, \
                 status, assigned_staff, created_at, updated_at, image_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.subject)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(&input.citizen_name)
            .bind(&input.status)
            .bind(&input.assigned_staff)
            .bind(&input.created_at)
            .bind(&input.updated_at)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the complaints filed by a citizen (exact name match, natural
    /// store order).
    pub async fn list_by_citizen(
        pool: &PgPool,
        citizen_name: &str,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE citizen_name = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(citizen_name)
            .fetch_all(pool)
            .await
    }

    /// List the complaints assigned to a staff member (exact name match,
    /// natural store order).
    pub async fn list_by_assigned_staff(
        pool: &PgPool,
        assigned_staff: &str,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE assigned_staff = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(assigned_staff)
            .fetch_all(pool)
            .await
    }

    /// Full scan in stable ascending-id order, for admin views and the
    /// CSV export.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints ORDER BY id ASC");
        sqlx::query_as::<_, Complaint>(&query).fetch_all(pool).await
    }

    /// Sparse merge: only non-`None` fields in `input` overwrite the row,
    /// while `updated_at` is always set to `now`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComplaint,
        now: &str,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET \
                status = COALESCE($2, status), \
                priority = COALESCE($3, priority), \
                category = COALESCE($4, category), \
                assigned_staff = COALESCE($5, assigned_staff), \
                deadline = COALESCE($6, deadline), \
                deadline_iso = COALESCE($7, deadline_iso), \
                admin_comments = COALESCE($8, admin_comments), \
                internal_notes = COALESCE($9, internal_notes), \
                alert_message = COALESCE($10, alert_message), \
                last_alert_at = COALESCE($11, last_alert_at), \
                is_escalated = COALESCE($12, is_escalated), \
                officer_notes = COALESCE($13, officer_notes), \
                updated_at = $14 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.category)
            .bind(&input.assigned_staff)
            .bind(&input.deadline)
            .bind(&input.deadline_iso)
            .bind(&input.admin_comments)
            .bind(&input.internal_notes)
            .bind(&input.alert_message)
            .bind(&input.last_alert_at)
            .bind(input.is_escalated)
            .bind(&input.officer_notes)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Assignment merge: same sparse semantics as [`Self::update`] but
    /// restricted to the staff/deadline fields.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        input: &AssignComplaint,
        now: &str,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET \
                assigned_staff = COALESCE($2, assigned_staff), \
                deadline = COALESCE($3, deadline), \
                deadline_iso = COALESCE($4, deadline_iso), \
                updated_at = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.assigned_staff)
            .bind(&input.deadline)
            .bind(&input.deadline_iso)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a complaint row by id. Returns `true` if a row was removed.
    ///
    /// Row-only: attachment files and feedback rows referencing the id are
    /// left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
