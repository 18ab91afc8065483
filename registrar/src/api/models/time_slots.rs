//! API models for time slots.

use crate::db::models::time_slots::TimeSlotDBResponse;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a time slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotCreate {
    /// Caller-supplied identifier (natural key)
    #[schema(example = "A")]
    pub time_slot_id: String,
    #[schema(example = "Monday")]
    pub day: String,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "09:50:00")]
    pub end_time: NaiveTime,
}

/// Request body for updating a time slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotUpdate {
    pub day: String,
    #[schema(value_type = String)]
    pub start_time: NaiveTime,
    #[schema(value_type = String)]
    pub end_time: NaiveTime,
}

/// Time slot details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotResponse {
    pub time_slot_id: String,
    pub day: String,
    #[schema(value_type = String)]
    pub start_time: NaiveTime,
    #[schema(value_type = String)]
    pub end_time: NaiveTime,
}

impl From<TimeSlotDBResponse> for TimeSlotResponse {
    fn from(db: TimeSlotDBResponse) -> Self {
        Self {
            time_slot_id: db.time_slot_id,
            day: db.day,
            start_time: db.start_time,
            end_time: db.end_time,
        }
    }
}
