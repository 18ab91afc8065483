use crate::api::models::rooms::{RoomCreate, RoomResponse, RoomUpdate};
use crate::db::handlers::{Repository, Rooms};
use crate::errors::{Error, Result};
use crate::keys::{validate_component, RoomKey};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    summary = "List hostel rooms",
    responses(
        (status = 200, description = "List of rooms", body = Vec<RoomResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<RoomResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let rooms = Rooms::new(&mut conn).list().await?;
    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    summary = "Create a hostel room",
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Room number contains the key separator, or the hostel does not exist"),
        (status = 409, description = "Room already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomCreate>,
) -> Result<(StatusCode, Json<RoomResponse>)> {
    validate_component("room_number", &request.room_number)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let room = Rooms::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

#[utoipa::path(
    put,
    path = "/rooms/{room_id}",
    tag = "rooms",
    summary = "Update a hostel room",
    params(("room_id" = String, Path, description = "Synthetic room id, `{hostel_id}-{room_number}`")),
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 400, description = "Malformed room id"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(request): Json<RoomUpdate>,
) -> Result<Json<RoomResponse>> {
    let key: RoomKey = room_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let room = Rooms::new(&mut conn).update(&key, &request.into()).await?;
    Ok(Json(room.into()))
}

#[utoipa::path(
    delete,
    path = "/rooms/{room_id}",
    tag = "rooms",
    summary = "Delete a hostel room",
    params(("room_id" = String, Path, description = "Synthetic room id, `{hostel_id}-{room_number}`")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 400, description = "Malformed room id"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_room(State(state): State<AppState>, Path(room_id): Path<String>) -> Result<StatusCode> {
    let key: RoomKey = room_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Rooms::new(&mut conn).delete(&key).await? {
        return Err(Error::NotFound {
            resource: "Room".to_string(),
            id: room_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::hostels::HostelResponse;
    use crate::api::models::rooms::RoomResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::PgPool;

    async fn create_hostel(server: &TestServer) -> i32 {
        let response = server
            .post("/api/hostels")
            .json(&json!({"hostel_name": "North Hall", "location": "Campus Rd", "capacity": 200}))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<HostelResponse>().hostel_id
    }

    #[sqlx::test]
    #[test_log::test]
    async fn room_is_addressable_by_its_synthetic_id(pool: PgPool) {
        let server = create_test_app(pool);
        let hostel_id = create_hostel(&server).await;

        let response = server
            .post("/api/rooms")
            .json(&json!({"hostel_id": hostel_id, "room_number": "12", "room_type": "Double", "floor_number": 1}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: RoomResponse = response.json();
        assert_eq!(created.room_id, format!("{hostel_id}-12"));

        let response = server
            .put(&format!("/api/rooms/{}", created.room_id))
            .json(&json!({"room_type": "Single", "floor_number": 2}))
            .await;
        response.assert_status_ok();
        let updated: RoomResponse = response.json();
        assert_eq!(updated.room_type.as_deref(), Some("Single"));
        assert_eq!(updated.room_id, created.room_id);

        server
            .delete(&format!("/api/rooms/{}", created.room_id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let remaining: Vec<RoomResponse> = server.get("/api/rooms").await.json();
        assert!(remaining.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn room_number_containing_separator_is_rejected(pool: PgPool) {
        let server = create_test_app(pool);
        let hostel_id = create_hostel(&server).await;

        let response = server
            .post("/api/rooms")
            .json(&json!({"hostel_id": hostel_id, "room_number": "12-B"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // The store was never touched
        let rooms: Vec<RoomResponse> = server.get("/api/rooms").await.json();
        assert!(rooms.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn malformed_room_id_is_a_bad_request(pool: PgPool) {
        let server = create_test_app(pool);

        let response = server.delete("/api/rooms/just-three-parts").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.put("/api/rooms/noseparator").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
