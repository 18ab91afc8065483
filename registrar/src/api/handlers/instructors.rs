use crate::api::models::instructors::{InstructorCreate, InstructorResponse, InstructorUpdate};
use crate::db::handlers::{Instructors, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/instructors",
    tag = "instructors",
    summary = "List instructors",
    responses(
        (status = 200, description = "List of instructors", body = Vec<InstructorResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_instructors(State(state): State<AppState>) -> Result<Json<Vec<InstructorResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let instructors = Instructors::new(&mut conn).list().await?;
    Ok(Json(instructors.into_iter().map(InstructorResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/instructors",
    tag = "instructors",
    summary = "Create an instructor",
    responses(
        (status = 201, description = "Instructor created", body = InstructorResponse),
        (status = 400, description = "Department does not exist"),
        (status = 409, description = "Instructor already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_instructor(
    State(state): State<AppState>,
    Json(request): Json<InstructorCreate>,
) -> Result<(StatusCode, Json<InstructorResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let instructor = Instructors::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(instructor.into())))
}

#[utoipa::path(
    put,
    path = "/instructors/{instructor_id}",
    tag = "instructors",
    summary = "Update an instructor",
    params(("instructor_id" = String, Path, description = "Instructor id")),
    responses(
        (status = 200, description = "Instructor updated", body = InstructorResponse),
        (status = 404, description = "Instructor not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_instructor(
    State(state): State<AppState>,
    Path(instructor_id): Path<String>,
    Json(request): Json<InstructorUpdate>,
) -> Result<Json<InstructorResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let instructor = Instructors::new(&mut conn).update(&instructor_id, &request.into()).await?;
    Ok(Json(instructor.into()))
}

#[utoipa::path(
    delete,
    path = "/instructors/{instructor_id}",
    tag = "instructors",
    summary = "Delete an instructor",
    params(("instructor_id" = String, Path, description = "Instructor id")),
    responses(
        (status = 204, description = "Instructor deleted"),
        (status = 404, description = "Instructor not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_instructor(State(state): State<AppState>, Path(instructor_id): Path<String>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Instructors::new(&mut conn).delete(&instructor_id).await? {
        return Err(Error::NotFound {
            resource: "Instructor".to_string(),
            id: instructor_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
