//! Database models for departments.

use crate::api::models::departments::{DepartmentCreate, DepartmentUpdate};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database request for creating a department
#[derive(Debug, Clone)]
pub struct DepartmentCreateDBRequest {
    pub dept_name: String,
    pub building: Option<String>,
    pub budget: Option<Decimal>,
}

impl From<DepartmentCreate> for DepartmentCreateDBRequest {
    fn from(api: DepartmentCreate) -> Self {
        Self {
            dept_name: api.dept_name,
            building: api.building,
            budget: api.budget,
        }
    }
}

/// Database request for updating a department. `dept_name` is the immutable
/// natural key and is not updatable.
#[derive(Debug, Clone)]
pub struct DepartmentUpdateDBRequest {
    pub building: Option<String>,
    pub budget: Option<Decimal>,
}

impl From<DepartmentUpdate> for DepartmentUpdateDBRequest {
    fn from(api: DepartmentUpdate) -> Self {
        Self {
            building: api.building,
            budget: api.budget,
        }
    }
}

/// Database response for a department row
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentDBResponse {
    pub dept_name: String,
    pub building: Option<String>,
    pub budget: Option<Decimal>,
}
