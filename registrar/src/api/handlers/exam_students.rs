use crate::api::models::exam_students::{ExamStudentCreate, ExamStudentResponse, ExamStudentUpdate};
use crate::db::handlers::{ExamStudents, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/exam-students",
    tag = "exam-students",
    summary = "List exam registrations",
    responses(
        (status = 200, description = "List of registrations", body = Vec<ExamStudentResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_exam_students(State(state): State<AppState>) -> Result<Json<Vec<ExamStudentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let registrations = ExamStudents::new(&mut conn).list().await?;
    Ok(Json(registrations.into_iter().map(ExamStudentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/exam-students",
    tag = "exam-students",
    summary = "Register a student for an exam",
    responses(
        (status = 201, description = "Registration created", body = ExamStudentResponse),
        (status = 400, description = "Exam or student does not exist"),
        (status = 409, description = "Registration already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_exam_student(
    State(state): State<AppState>,
    Json(request): Json<ExamStudentCreate>,
) -> Result<(StatusCode, Json<ExamStudentResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let registration = ExamStudents::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(registration.into())))
}

#[utoipa::path(
    put,
    path = "/exam-students/{exam_code}/{student_id}",
    tag = "exam-students",
    summary = "Record marks on a registration",
    params(
        ("exam_code" = String, Path, description = "Exam code"),
        ("student_id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Registration updated", body = ExamStudentResponse),
        (status = 404, description = "Registration not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_exam_student(
    State(state): State<AppState>,
    Path(key): Path<(String, i32)>,
    Json(request): Json<ExamStudentUpdate>,
) -> Result<Json<ExamStudentResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let registration = ExamStudents::new(&mut conn).update(&key, &request.into()).await?;
    Ok(Json(registration.into()))
}

#[utoipa::path(
    delete,
    path = "/exam-students/{exam_code}/{student_id}",
    tag = "exam-students",
    summary = "Remove an exam registration",
    params(
        ("exam_code" = String, Path, description = "Exam code"),
        ("student_id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 204, description = "Registration removed"),
        (status = 404, description = "Registration not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_exam_student(State(state): State<AppState>, Path(key): Path<(String, i32)>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !ExamStudents::new(&mut conn).delete(&key).await? {
        return Err(Error::NotFound {
            resource: "Exam registration".to_string(),
            id: format!("{}/{}", key.0, key.1),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
