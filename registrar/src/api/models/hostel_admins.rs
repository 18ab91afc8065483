//! API models for hostel-admin assignments.

use crate::db::models::hostel_admins::HostelAdminDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for assigning an instructor as a hostel admin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostelAdminCreate {
    pub instructor_id: String,
    pub hostel_id: i32,
}

/// Assignment details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostelAdminResponse {
    pub instructor_id: String,
    pub hostel_id: i32,
}

impl From<HostelAdminDBResponse> for HostelAdminResponse {
    fn from(db: HostelAdminDBResponse) -> Self {
        Self {
            instructor_id: db.instructor_id,
            hostel_id: db.hostel_id,
        }
    }
}
