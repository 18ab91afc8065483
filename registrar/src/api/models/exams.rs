//! API models for exams.

use crate::db::models::exams::ExamDBResponse;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an exam.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamCreate {
    /// Caller-supplied identifier (natural key)
    #[schema(example = "CS101-MID")]
    pub exam_code: String,
    pub date: Option<NaiveDate>,
    pub room_number: Option<String>,
}

/// Request body for updating an exam.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamUpdate {
    pub date: Option<NaiveDate>,
    pub room_number: Option<String>,
}

/// Exam details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamResponse {
    pub exam_code: String,
    pub date: Option<NaiveDate>,
    pub room_number: Option<String>,
}

impl From<ExamDBResponse> for ExamResponse {
    fn from(db: ExamDBResponse) -> Self {
        Self {
            exam_code: db.exam_code,
            date: db.date,
            room_number: db.room_no,
        }
    }
}
