//! API model for the aggregate stats endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row counts for every entity type, for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub departments: i64,
    pub hostels: i64,
    pub rooms: i64,
    pub instructors: i64,
    pub hostel_admins: i64,
    pub students: i64,
    pub courses: i64,
    pub sections: i64,
    pub classrooms: i64,
    pub time_slots: i64,
    pub exams: i64,
    pub exam_students: i64,
    pub enrollments: i64,
}
