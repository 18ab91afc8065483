//! Database models for hostels.
//!
//! The schema uses the flat variant: a single `location` string and a
//! `capacity` seat count.

use crate::api::models::hostels::{HostelCreate, HostelUpdate};
use sqlx::FromRow;

/// Database request for creating a hostel. `hostel_id` is generated by the
/// store.
#[derive(Debug, Clone)]
pub struct HostelCreateDBRequest {
    pub hostel_name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

impl From<HostelCreate> for HostelCreateDBRequest {
    fn from(api: HostelCreate) -> Self {
        Self {
            hostel_name: api.hostel_name,
            location: api.location,
            capacity: api.capacity,
        }
    }
}

/// Database request for updating a hostel
#[derive(Debug, Clone)]
pub struct HostelUpdateDBRequest {
    pub hostel_name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

impl From<HostelUpdate> for HostelUpdateDBRequest {
    fn from(api: HostelUpdate) -> Self {
        Self {
            hostel_name: api.hostel_name,
            location: api.location,
            capacity: api.capacity,
        }
    }
}

/// Database response for a hostel row
#[derive(Debug, Clone, FromRow)]
pub struct HostelDBResponse {
    pub hostel_id: i32,
    pub hostel_name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}
