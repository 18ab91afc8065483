//! API models for classrooms.

use crate::db::models::classrooms::ClassroomDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a classroom.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassroomCreate {
    #[schema(example = "Taylor")]
    pub building: String,
    #[schema(example = "3128")]
    pub room_number: String,
    pub capacity: Option<i32>,
}

/// Request body for updating a classroom. Only capacity is mutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassroomUpdate {
    pub capacity: Option<i32>,
}

/// Classroom details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassroomResponse {
    pub building: String,
    pub room_number: String,
    pub capacity: Option<i32>,
}

impl From<ClassroomDBResponse> for ClassroomResponse {
    fn from(db: ClassroomDBResponse) -> Self {
        Self {
            building: db.building,
            room_number: db.room_no,
            capacity: db.capacity,
        }
    }
}
