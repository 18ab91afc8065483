use crate::api::models::departments::{DepartmentCreate, DepartmentResponse, DepartmentUpdate};
use crate::db::handlers::{Departments, Repository};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/departments",
    tag = "departments",
    summary = "List departments",
    responses(
        (status = 200, description = "List of departments", body = Vec<DepartmentResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_departments(State(state): State<AppState>) -> Result<Json<Vec<DepartmentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let departments = Departments::new(&mut conn).list().await?;
    Ok(Json(departments.into_iter().map(DepartmentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/departments",
    tag = "departments",
    summary = "Create a department",
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 409, description = "Department already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<DepartmentCreate>,
) -> Result<(StatusCode, Json<DepartmentResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let department = Departments::new(&mut conn).create(&request.into()).await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

#[utoipa::path(
    put,
    path = "/departments/{dept_name}",
    tag = "departments",
    summary = "Update a department",
    params(("dept_name" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(dept_name): Path<String>,
    Json(request): Json<DepartmentUpdate>,
) -> Result<Json<DepartmentResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let department = Departments::new(&mut conn).update(&dept_name, &request.into()).await?;
    Ok(Json(department.into()))
}

#[utoipa::path(
    delete,
    path = "/departments/{dept_name}",
    tag = "departments",
    summary = "Delete a department",
    params(("dept_name" = String, Path, description = "Department name")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_department(State(state): State<AppState>, Path(dept_name): Path<String>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Departments::new(&mut conn).delete(&dept_name).await? {
        return Err(Error::NotFound {
            resource: "Department".to_string(),
            id: dept_name,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
