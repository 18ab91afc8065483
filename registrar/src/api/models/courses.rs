//! API models for courses.
//!
//! The API calls the display name `title`; storage calls it `course_name`.

use crate::db::models::courses::CourseDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseCreate {
    /// Caller-supplied identifier (natural key)
    #[schema(example = "CS101")]
    pub course_id: String,
    #[schema(example = "Intro to Computing")]
    pub title: String,
    /// Duration in weeks
    pub duration: Option<i32>,
}

/// Request body for updating a course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseUpdate {
    pub title: String,
    pub duration: Option<i32>,
}

/// Course details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: String,
    pub title: String,
    pub duration: Option<i32>,
}

impl From<CourseDBResponse> for CourseResponse {
    fn from(db: CourseDBResponse) -> Self {
        Self {
            course_id: db.course_id,
            title: db.course_name,
            duration: db.duration,
        }
    }
}
