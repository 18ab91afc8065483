//! Database models for instructors.
//!
//! Storage calls the key column `id`; the API exposes it as `instructor_id`.

use crate::api::models::instructors::{InstructorCreate, InstructorUpdate};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database request for creating an instructor
#[derive(Debug, Clone)]
pub struct InstructorCreateDBRequest {
    pub id: String,
    pub name: String,
    pub dept_name: Option<String>,
    pub salary: Option<Decimal>,
}

impl From<InstructorCreate> for InstructorCreateDBRequest {
    fn from(api: InstructorCreate) -> Self {
        Self {
            id: api.instructor_id,
            name: api.name,
            dept_name: api.dept_name,
            salary: api.salary,
        }
    }
}

/// Database request for updating an instructor
#[derive(Debug, Clone)]
pub struct InstructorUpdateDBRequest {
    pub name: String,
    pub dept_name: Option<String>,
    pub salary: Option<Decimal>,
}

impl From<InstructorUpdate> for InstructorUpdateDBRequest {
    fn from(api: InstructorUpdate) -> Self {
        Self {
            name: api.name,
            dept_name: api.dept_name,
            salary: api.salary,
        }
    }
}

/// Database response for an instructor row
#[derive(Debug, Clone, FromRow)]
pub struct InstructorDBResponse {
    pub id: String,
    pub name: String,
    pub dept_name: Option<String>,
    pub salary: Option<Decimal>,
}
