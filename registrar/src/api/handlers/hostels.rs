use crate::api::models::hostels::{HostelCreate, HostelResponse, HostelUpdate};
use crate::db::handlers::{Hostels, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/hostels",
    tag = "hostels",
    summary = "List hostels",
    responses(
        (status = 200, description = "List of hostels", body = Vec<HostelResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_hostels(State(state): State<AppState>) -> Result<Json<Vec<HostelResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let hostels = Hostels::new(&mut conn).list().await?;
    Ok(Json(hostels.into_iter().map(HostelResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/hostels",
    tag = "hostels",
    summary = "Create a hostel",
    responses(
        (status = 201, description = "Hostel created", body = HostelResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_hostel(
    State(state): State<AppState>,
    Json(request): Json<HostelCreate>,
) -> Result<(StatusCode, Json<HostelResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let hostel = Hostels::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(hostel.into())))
}

#[utoipa::path(
    put,
    path = "/hostels/{hostel_id}",
    tag = "hostels",
    summary = "Update a hostel",
    params(("hostel_id" = i32, Path, description = "Hostel id")),
    responses(
        (status = 200, description = "Hostel updated", body = HostelResponse),
        (status = 404, description = "Hostel not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_hostel(
    State(state): State<AppState>,
    Path(hostel_id): Path<i32>,
    Json(request): Json<HostelUpdate>,
) -> Result<Json<HostelResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let hostel = Hostels::new(&mut conn).update(&hostel_id, &request.into()).await?;
    Ok(Json(hostel.into()))
}

#[utoipa::path(
    delete,
    path = "/hostels/{hostel_id}",
    tag = "hostels",
    summary = "Delete a hostel",
    params(("hostel_id" = i32, Path, description = "Hostel id")),
    responses(
        (status = 204, description = "Hostel deleted"),
        (status = 404, description = "Hostel not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_hostel(State(state): State<AppState>, Path(hostel_id): Path<i32>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Hostels::new(&mut conn).delete(&hostel_id).await? {
        return Err(Error::NotFound {
            resource: "Hostel".to_string(),
            id: hostel_id.to_string(),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
