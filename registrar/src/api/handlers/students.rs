use crate::api::models::students::{StudentCreate, StudentResponse, StudentUpdate};
use crate::db::handlers::{Repository, Students};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    summary = "List students",
    responses(
        (status = 200, description = "List of students", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let students = Students::new(&mut conn).list().await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    summary = "Create a student",
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Malformed room id, or referenced department/room does not exist"),
        (status = 409, description = "Student already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>)> {
    let db_request = request.into_db()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let student = Students::new(&mut conn).create(&db_request).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

#[utoipa::path(
    put,
    path = "/students/{student_id}",
    tag = "students",
    summary = "Update a student",
    params(("student_id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Malformed room id"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(request): Json<StudentUpdate>,
) -> Result<Json<StudentResponse>> {
    let db_request = request.into_db()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let student = Students::new(&mut conn).update(&student_id, &db_request).await?;
    Ok(Json(student.into()))
}

#[utoipa::path(
    delete,
    path = "/students/{student_id}",
    tag = "students",
    summary = "Delete a student",
    params(("student_id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_student(State(state): State<AppState>, Path(student_id): Path<i32>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Students::new(&mut conn).delete(&student_id).await? {
        return Err(Error::NotFound {
            resource: "Student".to_string(),
            id: student_id.to_string(),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::hostels::HostelResponse;
    use crate::api::models::students::StudentResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn room_assignment_round_trips_as_a_synthetic_id(pool: PgPool) {
        let server = create_test_app(pool);

        let hostel: HostelResponse = server
            .post("/api/hostels")
            .json(&json!({"hostel_name": "North Hall"}))
            .await
            .json();
        server
            .post("/api/rooms")
            .json(&json!({"hostel_id": hostel.hostel_id, "room_number": "12"}))
            .await
            .assert_status(StatusCode::CREATED);

        let room_id = format!("{}-12", hostel.hostel_id);
        let response = server
            .post("/api/students")
            .json(&json!({"student_id": 7, "first_name": "Mira", "room_id": room_id}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: StudentResponse = response.json();
        assert_eq!(created.room_id.as_deref(), Some(room_id.as_str()));

        // Vacate the room
        let response = server
            .put("/api/students/7")
            .json(&json!({"first_name": "Mira", "room_id": null}))
            .await;
        response.assert_status_ok();
        let updated: StudentResponse = response.json();
        assert!(updated.room_id.is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn assignment_to_a_nonexistent_room_is_a_bad_request(pool: PgPool) {
        let server = create_test_app(pool);

        let response = server
            .post("/api/students")
            .json(&json!({"student_id": 8, "first_name": "Dev", "room_id": "9-101"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
