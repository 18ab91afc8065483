//! Database models for course sections.
//!
//! A section's identity is its full natural key
//! `(course_id, sec_id, semester, year)`. The key is immutable; updates touch
//! only the scheduling columns.

use crate::api::models::sections::{SectionCreate, SectionUpdate};
use sqlx::FromRow;

/// Database request for creating a section
#[derive(Debug, Clone)]
pub struct SectionCreateDBRequest {
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub building: Option<String>,
    pub room_no: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}

impl From<SectionCreate> for SectionCreateDBRequest {
    fn from(api: SectionCreate) -> Self {
        Self {
            course_id: api.course_id,
            sec_id: api.sec_id,
            semester: api.semester,
            year: api.year,
            building: api.building,
            room_no: api.room_number,
            time_slot_id: api.time_slot_id,
            instructor_id: api.instructor_id,
        }
    }
}

/// Database request for updating a section
#[derive(Debug, Clone)]
pub struct SectionUpdateDBRequest {
    pub building: Option<String>,
    pub room_no: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}

impl From<SectionUpdate> for SectionUpdateDBRequest {
    fn from(api: SectionUpdate) -> Self {
        Self {
            building: api.building,
            room_no: api.room_number,
            time_slot_id: api.time_slot_id,
            instructor_id: api.instructor_id,
        }
    }
}

/// Database response for a section row
#[derive(Debug, Clone, FromRow)]
pub struct SectionDBResponse {
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub building: Option<String>,
    pub room_no: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}
