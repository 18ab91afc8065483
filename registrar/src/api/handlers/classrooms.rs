use crate::api::models::classrooms::{ClassroomCreate, ClassroomResponse, ClassroomUpdate};
use crate::db::handlers::{Classrooms, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/classrooms",
    tag = "classrooms",
    summary = "List classrooms",
    responses(
        (status = 200, description = "List of classrooms", body = Vec<ClassroomResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_classrooms(State(state): State<AppState>) -> Result<Json<Vec<ClassroomResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let classrooms = Classrooms::new(&mut conn).list().await?;
    Ok(Json(classrooms.into_iter().map(ClassroomResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/classrooms",
    tag = "classrooms",
    summary = "Create a classroom",
    responses(
        (status = 201, description = "Classroom created", body = ClassroomResponse),
        (status = 409, description = "Classroom already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_classroom(
    State(state): State<AppState>,
    Json(request): Json<ClassroomCreate>,
) -> Result<(StatusCode, Json<ClassroomResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let classroom = Classrooms::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(classroom.into())))
}

#[utoipa::path(
    put,
    path = "/classrooms/{building}/{room_number}",
    tag = "classrooms",
    summary = "Update a classroom",
    params(
        ("building" = String, Path, description = "Building name"),
        ("room_number" = String, Path, description = "Room number within the building")
    ),
    responses(
        (status = 200, description = "Classroom updated", body = ClassroomResponse),
        (status = 404, description = "Classroom not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_classroom(
    State(state): State<AppState>,
    Path(key): Path<(String, String)>,
    Json(request): Json<ClassroomUpdate>,
) -> Result<Json<ClassroomResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let classroom = Classrooms::new(&mut conn).update(&key, &request.into()).await?;
    Ok(Json(classroom.into()))
}

#[utoipa::path(
    delete,
    path = "/classrooms/{building}/{room_number}",
    tag = "classrooms",
    summary = "Delete a classroom",
    params(
        ("building" = String, Path, description = "Building name"),
        ("room_number" = String, Path, description = "Room number within the building")
    ),
    responses(
        (status = 204, description = "Classroom deleted"),
        (status = 404, description = "Classroom not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_classroom(State(state): State<AppState>, Path(key): Path<(String, String)>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Classrooms::new(&mut conn).delete(&key).await? {
        return Err(Error::NotFound {
            resource: "Classroom".to_string(),
            id: format!("{}/{}", key.0, key.1),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::classrooms::ClassroomResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn classroom_crud_round_trip(pool: PgPool) {
        let server = create_test_app(pool);

        let response = server
            .post("/api/classrooms")
            .json(&json!({"building": "Taylor", "room_number": "3128", "capacity": 70}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: ClassroomResponse = response.json();
        assert_eq!(created.building, "Taylor");
        assert_eq!(created.room_number, "3128");

        let response = server
            .put("/api/classrooms/Taylor/3128")
            .json(&json!({"capacity": 80}))
            .await;
        response.assert_status_ok();
        let updated: ClassroomResponse = response.json();
        assert_eq!(updated.capacity, Some(80));

        let listed: Vec<ClassroomResponse> = server.get("/api/classrooms").await.json();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].capacity, Some(80));

        server.delete("/api/classrooms/Taylor/3128").await.assert_status(StatusCode::NO_CONTENT);
        // Repeated delete reports not-found
        let response = server.delete("/api/classrooms/Taylor/3128").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn duplicate_classroom_conflicts(pool: PgPool) {
        let server = create_test_app(pool);

        let body = json!({"building": "Painter", "room_number": "514"});
        server.post("/api/classrooms").json(&body).await.assert_status(StatusCode::CREATED);
        server.post("/api/classrooms").json(&body).await.assert_status(StatusCode::CONFLICT);
    }
}
