//! Database models for courses.
//!
//! Storage calls the display name `course_name`; the API exposes it as
//! `title`.

use crate::api::models::courses::{CourseCreate, CourseUpdate};
use sqlx::FromRow;

/// Database request for creating a course
#[derive(Debug, Clone)]
pub struct CourseCreateDBRequest {
    pub course_id: String,
    pub course_name: String,
    pub duration: Option<i32>,
}

impl From<CourseCreate> for CourseCreateDBRequest {
    fn from(api: CourseCreate) -> Self {
        Self {
            course_id: api.course_id,
            course_name: api.title,
            duration: api.duration,
        }
    }
}

/// Database request for updating a course
#[derive(Debug, Clone)]
pub struct CourseUpdateDBRequest {
    pub course_name: String,
    pub duration: Option<i32>,
}

impl From<CourseUpdate> for CourseUpdateDBRequest {
    fn from(api: CourseUpdate) -> Self {
        Self {
            course_name: api.title,
            duration: api.duration,
        }
    }
}

/// Database response for a course row
#[derive(Debug, Clone, FromRow)]
pub struct CourseDBResponse {
    pub course_id: String,
    pub course_name: String,
    pub duration: Option<i32>,
}
