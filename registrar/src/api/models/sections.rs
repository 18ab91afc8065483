//! API models for course sections.
//!
//! A section's synthetic `section_id` encodes its full natural key
//! `(course_id, sec_id, semester, year)`.

use crate::db::models::sections::SectionDBResponse;
use crate::keys::SectionKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a section.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionCreate {
    #[schema(example = "CS101")]
    pub course_id: String,
    /// Section number within the course offering. May not contain `-`.
    #[schema(example = "1")]
    pub sec_id: String,
    /// Term name. May not contain `-`.
    #[schema(example = "Fall")]
    pub semester: String,
    pub year: i32,
    pub building: Option<String>,
    pub room_number: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}

/// Request body for updating a section's scheduling. The natural key is
/// immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionUpdate {
    pub building: Option<String>,
    pub room_number: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}

/// Section details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
    /// Synthetic id, `{course_id}-{sec_id}-{semester}-{year}`
    #[schema(example = "CS101-1-Fall-2024")]
    pub section_id: String,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
    pub building: Option<String>,
    pub room_number: Option<String>,
    pub time_slot_id: Option<String>,
    pub instructor_id: Option<String>,
}

impl From<SectionDBResponse> for SectionResponse {
    fn from(db: SectionDBResponse) -> Self {
        let section_id = SectionKey {
            course_id: db.course_id.clone(),
            sec_id: db.sec_id.clone(),
            semester: db.semester.clone(),
            year: db.year,
        }
        .to_string();
        Self {
            section_id,
            course_id: db.course_id,
            sec_id: db.sec_id,
            semester: db.semester,
            year: db.year,
            building: db.building,
            room_number: db.room_no,
            time_slot_id: db.time_slot_id,
            instructor_id: db.instructor_id,
        }
    }
}
