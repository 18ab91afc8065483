use crate::api::models::courses::{CourseCreate, CourseResponse, CourseUpdate};
use crate::db::handlers::{Courses, Repository};
use crate::errors::{Error, Result};
use crate::keys::validate_component;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    summary = "List courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let courses = Courses::new(&mut conn).list().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/courses",
    tag = "courses",
    summary = "Create a course",
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Course id contains the key separator"),
        (status = 409, description = "Course already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CourseCreate>,
) -> Result<(StatusCode, Json<CourseResponse>)> {
    // course_id becomes a component of section and enrollment ids
    validate_component("course_id", &request.course_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let course = Courses::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = "courses",
    summary = "Update a course",
    params(("course_id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(request): Json<CourseUpdate>,
) -> Result<Json<CourseResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let course = Courses::new(&mut conn).update(&course_id, &request.into()).await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = "courses",
    summary = "Delete a course",
    params(("course_id" = String, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_course(State(state): State<AppState>, Path(course_id): Path<String>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Courses::new(&mut conn).delete(&course_id).await? {
        return Err(Error::NotFound {
            resource: "Course".to_string(),
            id: course_id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
