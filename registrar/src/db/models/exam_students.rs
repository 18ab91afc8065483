//! Database models for exam registrations.

use crate::api::models::exam_students::{ExamStudentCreate, ExamStudentUpdate};
use sqlx::FromRow;

/// Database request for registering a student for an exam
#[derive(Debug, Clone)]
pub struct ExamStudentCreateDBRequest {
    pub exam_code: String,
    pub student_id: i32,
    pub marks: Option<i32>,
}

impl From<ExamStudentCreate> for ExamStudentCreateDBRequest {
    fn from(api: ExamStudentCreate) -> Self {
        Self {
            exam_code: api.exam_code,
            student_id: api.student_id,
            marks: api.marks,
        }
    }
}

/// Database request for recording marks on a registration
#[derive(Debug, Clone)]
pub struct ExamStudentUpdateDBRequest {
    pub marks: Option<i32>,
}

impl From<ExamStudentUpdate> for ExamStudentUpdateDBRequest {
    fn from(api: ExamStudentUpdate) -> Self {
        Self { marks: api.marks }
    }
}

/// Database response for an exam registration row
#[derive(Debug, Clone, FromRow)]
pub struct ExamStudentDBResponse {
    pub exam_code: String,
    pub student_id: i32,
    pub marks: Option<i32>,
}
