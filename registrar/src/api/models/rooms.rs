//! API models for hostel rooms.
//!
//! Rooms are stored under `(hostel_id, room_number)` but addressed externally
//! by the synthetic `room_id` string. Responses carry both the id and its
//! constituent parts.

use crate::db::models::rooms::RoomDBResponse;
use crate::keys::RoomKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a hostel room.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomCreate {
    /// Hostel the room belongs to
    pub hostel_id: i32,
    /// Room number within the hostel. May not contain `-`.
    #[schema(example = "12")]
    pub room_number: String,
    #[schema(example = "Double")]
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}

/// Request body for updating a room. The key pair is immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomUpdate {
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}

/// Room details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomResponse {
    /// Synthetic id, `{hostel_id}-{room_number}`
    #[schema(example = "1-12")]
    pub room_id: String,
    pub hostel_id: i32,
    pub room_number: String,
    pub room_type: Option<String>,
    pub floor_number: Option<i32>,
}

impl From<RoomDBResponse> for RoomResponse {
    fn from(db: RoomDBResponse) -> Self {
        let room_id = RoomKey {
            hostel_id: db.hostel_id,
            room_number: db.room_number.clone(),
        }
        .to_string();
        Self {
            room_id,
            hostel_id: db.hostel_id,
            room_number: db.room_number,
            room_type: db.room_type,
            floor_number: db.floor_number,
        }
    }
}
