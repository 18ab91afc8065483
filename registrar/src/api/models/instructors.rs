//! API models for instructors.

use crate::db::models::instructors::InstructorDBResponse;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorCreate {
    /// Caller-supplied identifier (natural key)
    #[schema(example = "I-22222")]
    pub instructor_id: String,
    pub name: String,
    pub dept_name: Option<String>,
    #[schema(value_type = Option<String>, example = "72000.00")]
    pub salary: Option<Decimal>,
}

/// Request body for updating an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorUpdate {
    pub name: String,
    pub dept_name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub salary: Option<Decimal>,
}

/// Instructor details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorResponse {
    pub instructor_id: String,
    pub name: String,
    pub dept_name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub salary: Option<Decimal>,
}

impl From<InstructorDBResponse> for InstructorResponse {
    fn from(db: InstructorDBResponse) -> Self {
        Self {
            instructor_id: db.id,
            name: db.name,
            dept_name: db.dept_name,
            salary: db.salary,
        }
    }
}
