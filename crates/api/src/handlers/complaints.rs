//! Complaint lifecycle handlers: filing, triage, assignment, images, export.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;

use resolveit_core::complaint::{NOT_ASSIGNED, STATUS_UNDER_REVIEW};
use resolveit_core::error::CoreError;
use resolveit_core::export::{render_export, EXPORT_COLUMNS};
use resolveit_core::types::{now_timestamp, DbId};
use resolveit_db::models::complaint::{
    AssignComplaint, Complaint, CreateComplaint, UpdateComplaint,
};
use resolveit_db::repositories::ComplaintRepo;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Filename of the CSV export download.
const EXPORT_FILENAME: &str = "complaints_export.csv";

/// POST /complaints
///
/// File a new complaint from a multipart form. Text fields `subject`,
/// `description`, `category`, `priority`, and `citizenName` are required;
/// an `image` file part is optional.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Complaint>> {
    let mut subject = None;
    let mut description = None;
    let mut category = None;
    let mut priority = None;
    let mut citizen_name = None;
    let mut image: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "subject" => subject = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "category" => category = Some(read_text(field).await?),
            "priority" => priority = Some(read_text(field).await?),
            "citizenName" => citizen_name = Some(read_text(field).await?),
            "image" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !bytes.is_empty() {
                    image = Some((filename, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    let subject = required(subject, "subject")?;
    let description = required(description, "description")?;
    let category = required(category, "category")?;
    let priority = required(priority, "priority")?;
    let citizen_name = required(citizen_name, "citizenName")?;

    // Store the photo first so the row records its name. A storage failure
    // loses the photo but never the complaint.
    let mut image_path = None;
    if let Some((filename, bytes)) = image {
        match state
            .attachments
            .put_original(filename.as_deref(), &bytes)
            .await
        {
            Ok(stored) => image_path = Some(stored),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to store complaint image, continuing without it");
            }
        }
    }

    let now = now_timestamp();
    let input = CreateComplaint {
        subject,
        description,
        category,
        priority,
        citizen_name,
        status: STATUS_UNDER_REVIEW.to_string(),
        assigned_staff: NOT_ASSIGNED.to_string(),
        created_at: now.clone(),
        updated_at: now,
        image_path,
    };

    let complaint = ComplaintRepo::create(&state.pool, &input).await?;
    Ok(Json(complaint))
}

/// GET /complaints
pub async fn list_all(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Complaint>>> {
    let complaints = ComplaintRepo::list_all(&state.pool).await?;
    Ok(Json(complaints))
}

/// GET /complaints/citizen/{name}
pub async fn list_by_citizen(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Complaint>>> {
    let complaints = ComplaintRepo::list_by_citizen(&state.pool, &name).await?;
    Ok(Json(complaints))
}

/// GET /complaints/officer/{name}
pub async fn list_by_officer(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Complaint>>> {
    let complaints = ComplaintRepo::list_by_assigned_staff(&state.pool, &name).await?;
    Ok(Json(complaints))
}

/// GET /complaints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Complaint>> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;
    Ok(Json(complaint))
}

/// PUT /complaints/{id}
///
/// Sparse merge of the triage fields. `updatedAt` is stamped on every call,
/// even an empty one.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaint>,
) -> AppResult<Json<Complaint>> {
    let now = now_timestamp();
    let complaint = ComplaintRepo::update(&state.pool, id, &input, &now)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;
    Ok(Json(complaint))
}

/// PUT /complaints/{id}/assign
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignComplaint>,
) -> AppResult<Json<Complaint>> {
    let now = now_timestamp();
    let complaint = ComplaintRepo::assign(&state.pool, id, &input, &now)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;
    Ok(Json(complaint))
}

/// DELETE /complaints/{id}
///
/// Removes the row only. Attachment files and feedback rows referencing the
/// id stay behind.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ComplaintRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))
    }
}

/// GET /complaints/export/csv
///
/// Download every complaint as a CSV attachment, ascending by id.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let complaints = ComplaintRepo::list_all(&state.pool).await?;

    let rows = complaints.into_iter().map(|c| -> [String; EXPORT_COLUMNS] {
        [
            c.id.to_string(),
            c.subject,
            c.category.unwrap_or_default(),
            c.priority.unwrap_or_default(),
            c.status.unwrap_or_default(),
            c.citizen_name.unwrap_or_default(),
            c.assigned_staff.unwrap_or_default(),
            c.created_at.unwrap_or_default(),
            c.updated_at.unwrap_or_default(),
            c.deadline.unwrap_or_default(),
        ]
    });
    let csv = render_export(rows);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        )
        .header(header::CONTENT_LENGTH, csv.len().to_string())
        .body(Body::from(csv))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// GET /complaints/{id}/image
///
/// Streams the citizen's original photo. 404 when the complaint does not
/// exist, never had a photo, or the recorded file is gone from disk.
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;

    // A blank path counts as no photo; opening "" would hit the upload
    // directory itself.
    let image_path = complaint
        .image_path
        .filter(|p| !p.is_empty())
        .ok_or(CoreError::NotFound {
            entity: "ComplaintImage",
            id,
        })?;

    let (file, content_type) = state
        .attachments
        .open_original(&image_path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or(CoreError::NotFound {
            entity: "ComplaintImage",
            id,
        })?;

    stream_file(file, content_type).await
}

/// POST /complaints/{id}/resolution-image
///
/// Store the officer's resolution photo in the complaint's fixed slot,
/// replacing any prior upload. The complaint row itself is untouched, so
/// the id is not checked against the database.
pub async fn upload_resolution_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<StatusCode> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some(bytes.to_vec());
        }
    }

    let bytes = image.ok_or_else(|| AppError::BadRequest("file is required".into()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("file is required".into()));
    }

    state
        .attachments
        .put_resolution(id, &bytes)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(StatusCode::OK)
}

/// GET /complaints/{id}/resolution-image
pub async fn get_resolution_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (file, content_type) = state
        .attachments
        .open_resolution(id)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or(CoreError::NotFound {
            entity: "ResolutionImage",
            id,
        })?;

    stream_file(file, content_type).await
}

/// Serve an open file as a streaming response body.
async fn stream_file(file: tokio::fs::File, content_type: &'static str) -> AppResult<Response> {
    let size = file
        .metadata()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .len();
    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, size.to_string())
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// Read a multipart text field.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("{name} is required")))
}
