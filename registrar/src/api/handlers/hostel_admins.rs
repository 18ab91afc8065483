use crate::api::models::hostel_admins::{HostelAdminCreate, HostelAdminResponse};
use crate::db::handlers::HostelAdmins;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/hostel-admins",
    tag = "hostel-admins",
    summary = "List hostel-admin assignments",
    responses(
        (status = 200, description = "List of assignments", body = Vec<HostelAdminResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_hostel_admins(State(state): State<AppState>) -> Result<Json<Vec<HostelAdminResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let assignments = HostelAdmins::new(&mut conn).list().await?;
    Ok(Json(assignments.into_iter().map(HostelAdminResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/hostel-admins",
    tag = "hostel-admins",
    summary = "Assign an instructor as a hostel admin",
    responses(
        (status = 201, description = "Assignment created", body = HostelAdminResponse),
        (status = 400, description = "Instructor or hostel does not exist"),
        (status = 409, description = "Assignment already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_hostel_admin(
    State(state): State<AppState>,
    Json(request): Json<HostelAdminCreate>,
) -> Result<(StatusCode, Json<HostelAdminResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let assignment = HostelAdmins::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}

#[utoipa::path(
    delete,
    path = "/hostel-admins/{instructor_id}/{hostel_id}",
    tag = "hostel-admins",
    summary = "Remove a hostel-admin assignment",
    params(
        ("instructor_id" = String, Path, description = "Instructor id"),
        ("hostel_id" = i32, Path, description = "Hostel id")
    ),
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_hostel_admin(
    State(state): State<AppState>,
    Path((instructor_id, hostel_id)): Path<(String, i32)>,
) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !HostelAdmins::new(&mut conn).delete(&instructor_id, hostel_id).await? {
        return Err(Error::NotFound {
            resource: "Hostel admin assignment".to_string(),
            id: format!("{instructor_id}/{hostel_id}"),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
