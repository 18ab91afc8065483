//! API models for enrollments.
//!
//! An enrollment's synthetic `enrollment_id` encodes
//! `(student_id, course_id, sec_id, semester, year)`.

use crate::db::models::enrollments::EnrollmentDBResponse;
use crate::keys::EnrollmentKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for enrolling a student in a section.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentCreate {
    pub student_id: i32,
    #[schema(example = "CS101")]
    pub course_id: String,
    #[schema(example = "1")]
    pub sec_id: String,
    #[schema(example = "Fall")]
    pub semester: String,
    pub year: i32,
    pub grade: Option<String>,
}

/// Request body for recording a grade on an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentUpdate {
    pub grade: Option<String>,
}

/// Enrollment details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    /// Synthetic id, `{student_id}-{course_id}-{sec_id}-{semester}-{year}`
    #[schema(example = "42-CS101-1-Fall-2024")]
    pub enrollment_id: String,
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub grade: Option<String>,
}

impl From<EnrollmentDBResponse> for EnrollmentResponse {
    fn from(db: EnrollmentDBResponse) -> Self {
        let enrollment_id = EnrollmentKey {
            student_id: db.student_id,
            course_id: db.course_id.clone(),
            sec_id: db.sec_id.clone(),
            semester: db.semester.clone(),
            year: db.year,
        }
        .to_string();
        Self {
            enrollment_id,
            student_id: db.student_id,
            course_id: db.course_id,
            sec_id: db.sec_id,
            semester: db.semester,
            year: db.year,
            grade: db.grade,
        }
    }
}
