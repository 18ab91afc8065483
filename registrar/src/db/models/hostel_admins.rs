//! Database models for hostel-admin assignments.
//!
//! An assignment links an instructor to a hostel. The pair is the primary
//! key; assignments are created and deleted, never updated.

use crate::api::models::hostel_admins::HostelAdminCreate;
use sqlx::FromRow;

/// Database request for creating an assignment
#[derive(Debug, Clone)]
pub struct HostelAdminCreateDBRequest {
    pub instructor_id: String,
    pub hostel_id: i32,
}

impl From<HostelAdminCreate> for HostelAdminCreateDBRequest {
    fn from(api: HostelAdminCreate) -> Self {
        Self {
            instructor_id: api.instructor_id,
            hostel_id: api.hostel_id,
        }
    }
}

/// Database response for an assignment row
#[derive(Debug, Clone, FromRow)]
pub struct HostelAdminDBResponse {
    pub instructor_id: String,
    pub hostel_id: i32,
}
