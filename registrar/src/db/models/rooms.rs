//! Database models for hostel rooms.

use crate::api::models::rooms::{RoomCreate, RoomUpdate};
use sqlx::FromRow;

/// Database request for creating a hostel room
#[derive(Debug, Clone)]
pub struct RoomCreateDBRequest {
    pub hostel_id: i32,
    pub room_number: String,
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}

impl From<RoomCreate> for RoomCreateDBRequest {
    fn from(api: RoomCreate) -> Self {
        Self {
            hostel_id: api.hostel_id,
            room_number: api.room_number,
            room_type: api.room_type,
            floor_number: api.floor_number,
        }
    }
}

/// Database request for updating a hostel room. The composite key
/// `(hostel_id, room_number)` is immutable; only the descriptive columns
/// change.
#[derive(Debug, Clone)]
pub struct RoomUpdateDBRequest {
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}

impl From<RoomUpdate> for RoomUpdateDBRequest {
    fn from(api: RoomUpdate) -> Self {
        Self {
            room_type: api.room_type,
            floor_number: api.floor_number,
        }
    }
}

/// Database response for a hostel room row
#[derive(Debug, Clone, FromRow)]
pub struct RoomDBResponse {
    pub hostel_id: i32,
    pub room_number: String,
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}
