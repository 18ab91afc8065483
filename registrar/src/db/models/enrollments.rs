//! Database models for enrollments (the `takes` table).

use crate::api::models::enrollments::{EnrollmentCreate, EnrollmentUpdate};
use sqlx::FromRow;

/// Database request for creating an enrollment
#[derive(Debug, Clone)]
pub struct EnrollmentCreateDBRequest {
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub grade: Option<String>,
}

impl From<EnrollmentCreate> for EnrollmentCreateDBRequest {
    fn from(api: EnrollmentCreate) -> Self {
        Self {
            student_id: api.student_id,
            course_id: api.course_id,
            sec_id: api.sec_id,
            semester: api.semester,
            year: api.year,
            grade: api.grade,
        }
    }
}

/// Database request for recording a grade on an enrollment
#[derive(Debug, Clone)]
pub struct EnrollmentUpdateDBRequest {
    pub grade: Option<String>,
}

impl From<EnrollmentUpdate> for EnrollmentUpdateDBRequest {
    fn from(api: EnrollmentUpdate) -> Self {
        Self { grade: api.grade }
    }
}

/// Database response for an enrollment row
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentDBResponse {
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub grade: Option<String>,
}
