//! Database models for exams.
//!
//! Storage calls the room column `room_no`; the API exposes it as
//! `room_number`.

use crate::api::models::exams::{ExamCreate, ExamUpdate};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating an exam
#[derive(Debug, Clone)]
pub struct ExamCreateDBRequest {
    pub exam_code: String,
    pub date: Option<NaiveDate>,
    pub room_no: Option<String>,
}

impl From<ExamCreate> for ExamCreateDBRequest {
    fn from(api: ExamCreate) -> Self {
        Self {
            exam_code: api.exam_code,
            date: api.date,
            room_no: api.room_number,
        }
    }
}

/// Database request for updating an exam
#[derive(Debug, Clone)]
pub struct ExamUpdateDBRequest {
    pub date: Option<NaiveDate>,
    pub room_no: Option<String>,
}

impl From<ExamUpdate> for ExamUpdateDBRequest {
    fn from(api: ExamUpdate) -> Self {
        Self {
            date: api.date,
            room_no: api.room_number,
        }
    }
}

/// Database response for an exam row
#[derive(Debug, Clone, FromRow)]
pub struct ExamDBResponse {
    pub exam_code: String,
    pub date: Option<NaiveDate>,
    pub room_no: Option<String>,
}
