use crate::api::models::sections::{SectionCreate, SectionResponse, SectionUpdate};
use crate::db::handlers::{Repository, Sections};
use crate::errors::{Error, Result};
use crate::keys::{validate_component, SectionKey};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/sections",
    tag = "sections",
    summary = "List sections",
    responses(
        (status = 200, description = "List of sections", body = Vec<SectionResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sections(State(state): State<AppState>) -> Result<Json<Vec<SectionResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let sections = Sections::new(&mut conn).list().await?;
    Ok(Json(sections.into_iter().map(SectionResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/sections",
    tag = "sections",
    summary = "Create a section",
    responses(
        (status = 201, description = "Section created", body = SectionResponse),
        (status = 400, description = "A key component contains the separator, or a referenced row does not exist"),
        (status = 409, description = "Section already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_section(
    State(state): State<AppState>,
    Json(request): Json<SectionCreate>,
) -> Result<(StatusCode, Json<SectionResponse>)> {
    validate_component("course_id", &request.course_id)?;
    validate_component("sec_id", &request.sec_id)?;
    validate_component("semester", &request.semester)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let section = Sections::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(section.into())))
}

#[utoipa::path(
    put,
    path = "/sections/{section_id}",
    tag = "sections",
    summary = "Update a section's scheduling",
    params(("section_id" = String, Path, description = "Synthetic section id, `{course_id}-{sec_id}-{semester}-{year}`")),
    responses(
        (status = 200, description = "Section updated", body = SectionResponse),
        (status = 400, description = "Malformed section id"),
        (status = 404, description = "Section not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
    Json(request): Json<SectionUpdate>,
) -> Result<Json<SectionResponse>> {
    let key: SectionKey = section_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let section = Sections::new(&mut conn).update(&key, &request.into()).await?;
    Ok(Json(section.into()))
}

#[utoipa::path(
    delete,
    path = "/sections/{section_id}",
    tag = "sections",
    summary = "Delete a section",
    params(("section_id" = String, Path, description = "Synthetic section id, `{course_id}-{sec_id}-{semester}-{year}`")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Malformed section id"),
        (status = 404, description = "Section not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_section(State(state): State<AppState>, Path(section_id): Path<String>) -> Result<StatusCode> {
    let key: SectionKey = section_id.parse()?;
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Sections::new(&mut conn).delete(&key).await? {
        return Err(Error::NotFound {
            resource: "Section".to_string(),
            id: section_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
