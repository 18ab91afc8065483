//! API models for exam registrations.

use crate::db::models::exam_students::ExamStudentDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for registering a student for an exam.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamStudentCreate {
    pub exam_code: String,
    pub student_id: i32,
    pub marks: Option<i32>,
}

/// Request body for recording marks on a registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamStudentUpdate {
    pub marks: Option<i32>,
}

/// Exam registration details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamStudentResponse {
    pub exam_code: String,
    pub student_id: i32,
    pub marks: Option<i32>,
}

impl From<ExamStudentDBResponse> for ExamStudentResponse {
    fn from(db: ExamStudentDBResponse) -> Self {
        Self {
            exam_code: db.exam_code,
            student_id: db.student_id,
            marks: db.marks,
        }
    }
}
