//! API models for hostels.

use crate::db::models::hostels::HostelDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a hostel. The id is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostelCreate {
    #[schema(example = "North Hall")]
    pub hostel_name: String,
    pub location: Option<String>,
    /// Total seats across all rooms
    pub capacity: Option<i32>,
}

/// Request body for updating a hostel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostelUpdate {
    pub hostel_name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

/// Hostel details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostelResponse {
    pub hostel_id: i32,
    pub hostel_name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

impl From<HostelDBResponse> for HostelResponse {
    fn from(db: HostelDBResponse) -> Self {
        Self {
            hostel_id: db.hostel_id,
            hostel_name: db.hostel_name,
            location: db.location,
            capacity: db.capacity,
        }
    }
}
