//! API models for departments.

use crate::db::models::departments::DepartmentDBResponse;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a department.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentCreate {
    /// Department name (natural key)
    #[schema(example = "Comp. Sci.")]
    pub dept_name: String,
    /// Building the department is housed in
    pub building: Option<String>,
    /// Annual budget
    #[schema(value_type = Option<String>, example = "90000.00")]
    pub budget: Option<Decimal>,
}

/// Request body for updating a department. The name is the key and cannot
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentUpdate {
    pub building: Option<String>,
    #[schema(value_type = Option<String>)]
    pub budget: Option<Decimal>,
}

/// Department details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponse {
    pub dept_name: String,
    pub building: Option<String>,
    #[schema(value_type = Option<String>)]
    pub budget: Option<Decimal>,
}

impl From<DepartmentDBResponse> for DepartmentResponse {
    fn from(db: DepartmentDBResponse) -> Self {
        Self {
            dept_name: db.dept_name,
            building: db.building,
            budget: db.budget,
        }
    }
}
