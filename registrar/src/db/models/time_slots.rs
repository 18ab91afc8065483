//! Database models for time slots.

use crate::api::models::time_slots::{TimeSlotCreate, TimeSlotUpdate};
use chrono::NaiveTime;
use sqlx::FromRow;

/// Database request for creating a time slot
#[derive(Debug, Clone)]
pub struct TimeSlotCreateDBRequest {
    pub time_slot_id: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<TimeSlotCreate> for TimeSlotCreateDBRequest {
    fn from(api: TimeSlotCreate) -> Self {
        Self {
            time_slot_id: api.time_slot_id,
            day: api.day,
            start_time: api.start_time,
            end_time: api.end_time,
        }
    }
}

/// Database request for updating a time slot
#[derive(Debug, Clone)]
pub struct TimeSlotUpdateDBRequest {
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<TimeSlotUpdate> for TimeSlotUpdateDBRequest {
    fn from(api: TimeSlotUpdate) -> Self {
        Self {
            day: api.day,
            start_time: api.start_time,
            end_time: api.end_time,
        }
    }
}

/// Database response for a time slot row
#[derive(Debug, Clone, FromRow)]
pub struct TimeSlotDBResponse {
    pub time_slot_id: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
