use crate::api::models::enrollments::{EnrollmentCreate, EnrollmentResponse, EnrollmentUpdate};
use crate::db::handlers::{Enrollments, Repository};
use crate::errors::{Error, Result};
use crate::keys::{validate_component, EnrollmentKey};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/enrollments",
    tag = "enrollments",
    summary = "List enrollments",
    responses(
        (status = 200, description = "List of enrollments", body = Vec<EnrollmentResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_enrollments(State(state): State<AppState>) -> Result<Json<Vec<EnrollmentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let enrollments = Enrollments::new(&mut conn).list().await?;
    Ok(Json(enrollments.into_iter().map(EnrollmentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/enrollments",
    tag = "enrollments",
    summary = "Enroll a student in a section",
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 400, description = "A key component contains the separator, or the student/section does not exist"),
        (status = 409, description = "Enrollment already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(request): Json<EnrollmentCreate>,
) -> Result<(StatusCode, Json<EnrollmentResponse>)> {
    validate_component("course_id", &request.course_id)?;
    validate_component("sec_id", &request.sec_id)?;
    validate_component("semester", &request.semester)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let enrollment = Enrollments::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

#[utoipa::path(
    put,
    path = "/enrollments/{enrollment_id}",
    tag = "enrollments",
    summary = "Record a grade on an enrollment",
    params(("enrollment_id" = String, Path, description = "Synthetic enrollment id, `{student_id}-{course_id}-{sec_id}-{semester}-{year}`")),
    responses(
        (status = 200, description = "Enrollment updated", body = EnrollmentResponse),
        (status = 400, description = "Malformed enrollment id"),
        (status = 404, description = "Enrollment not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
    Json(request): Json<EnrollmentUpdate>,
) -> Result<Json<EnrollmentResponse>> {
    let key: EnrollmentKey = enrollment_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let enrollment = Enrollments::new(&mut conn).update(&key, &request.into()).await?;
    Ok(Json(enrollment.into()))
}

#[utoipa::path(
    delete,
    path = "/enrollments/{enrollment_id}",
    tag = "enrollments",
    summary = "Delete an enrollment",
    params(("enrollment_id" = String, Path, description = "Synthetic enrollment id, `{student_id}-{course_id}-{sec_id}-{semester}-{year}`")),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 400, description = "Malformed enrollment id"),
        (status = 404, description = "Enrollment not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_enrollment(State(state): State<AppState>, Path(enrollment_id): Path<String>) -> Result<StatusCode> {
    let key: EnrollmentKey = enrollment_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Enrollments::new(&mut conn).delete(&key).await? {
        return Err(Error::NotFound {
            resource: "Enrollment".to_string(),
            id: enrollment_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::enrollments::EnrollmentResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::PgPool;

    async fn seed(server: &TestServer) {
        server
            .post("/api/students")
            .json(&json!({"student_id": 42, "first_name": "Ravi"}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/courses")
            .json(&json!({"course_id": "CS101", "title": "Intro to Computing", "duration": 14}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/sections")
            .json(&json!({"course_id": "CS101", "sec_id": "1", "semester": "Fall", "year": 2024}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn enrollment_lifecycle_through_its_synthetic_id(pool: PgPool) {
        let server = create_test_app(pool);
        seed(&server).await;

        let response = server
            .post("/api/enrollments")
            .json(&json!({"student_id": 42, "course_id": "CS101", "sec_id": "1", "semester": "Fall", "year": 2024}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: EnrollmentResponse = response.json();
        assert_eq!(created.enrollment_id, "42-CS101-1-Fall-2024");
        assert!(created.grade.is_none());

        let response = server
            .put("/api/enrollments/42-CS101-1-Fall-2024")
            .json(&json!({"grade": "A"}))
            .await;
        response.assert_status_ok();
        let graded: EnrollmentResponse = response.json();
        assert_eq!(graded.grade.as_deref(), Some("A"));

        server
            .delete("/api/enrollments/42-CS101-1-Fall-2024")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete("/api/enrollments/42-CS101-1-Fall-2024")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn semester_containing_separator_is_rejected(pool: PgPool) {
        let server = create_test_app(pool);
        seed(&server).await;

        let response = server
            .post("/api/enrollments")
            .json(&json!({"student_id": 42, "course_id": "CS101", "sec_id": "1", "semester": "Fall-Extra", "year": 2024}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn enrollment_against_missing_section_is_a_bad_request(pool: PgPool) {
        let server = create_test_app(pool);
        seed(&server).await;

        let response = server
            .post("/api/enrollments")
            .json(&json!({"student_id": 42, "course_id": "CS101", "sec_id": "9", "semester": "Fall", "year": 2024}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
