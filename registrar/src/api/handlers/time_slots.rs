use crate::api::models::time_slots::{TimeSlotCreate, TimeSlotResponse, TimeSlotUpdate};
use crate::db::handlers::{Repository, TimeSlots};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/timeslots",
    tag = "timeslots",
    summary = "List time slots",
    responses(
        (status = 200, description = "List of time slots", body = Vec<TimeSlotResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_time_slots(State(state): State<AppState>) -> Result<Json<Vec<TimeSlotResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let slots = TimeSlots::new(&mut conn).list().await?;
    Ok(Json(slots.into_iter().map(TimeSlotResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/timeslots",
    tag = "timeslots",
    summary = "Create a time slot",
    responses(
        (status = 201, description = "Time slot created", body = TimeSlotResponse),
        (status = 409, description = "Time slot already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_time_slot(
    State(state): State<AppState>,
    Json(request): Json<TimeSlotCreate>,
) -> Result<(StatusCode, Json<TimeSlotResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let slot = TimeSlots::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(slot.into())))
}

#[utoipa::path(
    put,
    path = "/timeslots/{time_slot_id}",
    tag = "timeslots",
    summary = "Update a time slot",
    params(("time_slot_id" = String, Path, description = "Time slot id")),
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlotResponse),
        (status = 404, description = "Time slot not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_time_slot(
    State(state): State<AppState>,
    Path(time_slot_id): Path<String>,
    Json(request): Json<TimeSlotUpdate>,
) -> Result<Json<TimeSlotResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let slot = TimeSlots::new(&mut conn).update(&time_slot_id, &request.into()).await?;
    Ok(Json(slot.into()))
}

#[utoipa::path(
    delete,
    path = "/timeslots/{time_slot_id}",
    tag = "timeslots",
    summary = "Delete a time slot",
    params(("time_slot_id" = String, Path, description = "Time slot id")),
    responses(
        (status = 204, description = "Time slot deleted"),
        (status = 404, description = "Time slot not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_time_slot(State(state): State<AppState>, Path(time_slot_id): Path<String>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !TimeSlots::new(&mut conn).delete(&time_slot_id).await? {
        return Err(Error::NotFound {
            resource: "Time slot".to_string(),
            id: time_slot_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
