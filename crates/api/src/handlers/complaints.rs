//! Handlers for the `/complaints` resource.
//!
//! Submission is public; everything else is admin-only.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::complaint::{prepare_submission, validate_status};
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::complaint::{CreateComplaint, UpdateComplaintStatus};
use portal_db::repositories::ComplaintRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::origin::ClientOrigin;
use crate::middleware::path::Path;
use crate::query::StatusFilterParams;
use crate::state::AppState;

/// Request body for `POST /complaints`.
#[derive(Debug, Deserialize)]
pub struct SubmitComplaintRequest {
    #[serde(default)]
    pub content: String,
    pub contact_info: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitComplaintResponse {
    pub success: bool,
    pub id: DbId,
}

/// POST /api/v1/complaints
///
/// Empty content is rejected before anything is written.
pub async fn submit(
    State(state): State<AppState>,
    ClientOrigin(origin): ClientOrigin,
    Json(input): Json<SubmitComplaintRequest>,
) -> AppResult<impl IntoResponse> {
    let prepared = prepare_submission(&input.content, input.contact_info.as_deref())?;

    let complaint = ComplaintRepo::create(
        &state.pool,
        &CreateComplaint {
            content: prepared.content,
            contact_info: prepared.contact_info,
            origin,
        },
    )
    .await?;

    tracing::info!(complaint_id = complaint.id, origin = %complaint.origin, "Complaint submitted");
    Ok((
        StatusCode::CREATED,
        Json(SubmitComplaintResponse {
            success: true,
            id: complaint.id,
        }),
    ))
}

/// GET /api/v1/complaints?status=pending
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_status(status)?;
    }
    let complaints = ComplaintRepo::list(&state.pool, params.status.as_deref()).await?;
    Ok(Json(complaints))
}

/// PUT /api/v1/complaints/{id}
pub async fn update_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaintStatus>,
) -> AppResult<impl IntoResponse> {
    validate_status(&input.status)?;

    let complaint = ComplaintRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    tracing::info!(
        complaint_id = id,
        status = %complaint.status,
        admin_id = admin.admin_id,
        "Complaint status updated"
    );
    Ok(Json(complaint))
}

/// DELETE /api/v1/complaints/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ComplaintRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }));
    }
    tracing::info!(complaint_id = id, admin_id = admin.admin_id, "Complaint deleted");
    Ok(StatusCode::NO_CONTENT)
}
