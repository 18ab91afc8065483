use crate::api::models::exams::{ExamCreate, ExamResponse, ExamUpdate};
use crate::db::handlers::{Exams, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/exams",
    tag = "exams",
    summary = "List exams",
    responses(
        (status = 200, description = "List of exams", body = Vec<ExamResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_exams(State(state): State<AppState>) -> Result<Json<Vec<ExamResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let exams = Exams::new(&mut conn).list().await?;
    Ok(Json(exams.into_iter().map(ExamResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/exams",
    tag = "exams",
    summary = "Create an exam",
    responses(
        (status = 201, description = "Exam created", body = ExamResponse),
        (status = 409, description = "Exam already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_exam(
    State(state): State<AppState>,
    Json(request): Json<ExamCreate>,
) -> Result<(StatusCode, Json<ExamResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let exam = Exams::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(exam.into())))
}

#[utoipa::path(
    put,
    path = "/exams/{exam_code}",
    tag = "exams",
    summary = "Update an exam",
    params(("exam_code" = String, Path, description = "Exam code")),
    responses(
        (status = 200, description = "Exam updated", body = ExamResponse),
        (status = 404, description = "Exam not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_exam(
    State(state): State<AppState>,
    Path(exam_code): Path<String>,
    Json(request): Json<ExamUpdate>,
) -> Result<Json<ExamResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let exam = Exams::new(&mut conn).update(&exam_code, &request.into()).await?;
    Ok(Json(exam.into()))
}

#[utoipa::path(
    delete,
    path = "/exams/{exam_code}",
    tag = "exams",
    summary = "Delete an exam",
    params(("exam_code" = String, Path, description = "Exam code")),
    responses(
        (status = 204, description = "Exam deleted"),
        (status = 404, description = "Exam not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_exam(State(state): State<AppState>, Path(exam_code): Path<String>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Exams::new(&mut conn).delete(&exam_code).await? {
        return Err(Error::NotFound {
            resource: "Exam".to_string(),
            id: exam_code,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
