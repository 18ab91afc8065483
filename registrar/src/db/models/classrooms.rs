//! Database models for classrooms.
//!
//! Storage calls the room column `room_no`; the API exposes it as
//! `room_number`. Classrooms are addressed by the composite
//! `(building, room_no)` key as two path segments, so no synthetic id is
//! derived.

use crate::api::models::classrooms::{ClassroomCreate, ClassroomUpdate};
use sqlx::FromRow;

/// Database request for creating a classroom
#[derive(Debug, Clone)]
pub struct ClassroomCreateDBRequest {
    pub building: String,
    pub room_no: String,
    pub capacity: Option<i32>,
}

impl From<ClassroomCreate> for ClassroomCreateDBRequest {
    fn from(api: ClassroomCreate) -> Self {
        Self {
            building: api.building,
            room_no: api.room_number,
            capacity: api.capacity,
        }
    }
}

/// Database request for updating a classroom
#[derive(Debug, Clone)]
pub struct ClassroomUpdateDBRequest {
    pub capacity: Option<i32>,
}

impl From<ClassroomUpdate> for ClassroomUpdateDBRequest {
    fn from(api: ClassroomUpdate) -> Self {
        Self { capacity: api.capacity }
    }
}

/// Database response for a classroom row
#[derive(Debug, Clone, FromRow)]
pub struct ClassroomDBResponse {
    pub building: String,
    pub room_no: String,
    pub capacity: Option<i32>,
}
