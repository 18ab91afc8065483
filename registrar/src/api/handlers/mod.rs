//! HTTP request handlers for all API endpoints.
//!
//! One module per entity, each exposing the standard shape: `list_*`,
//! `create_*` (201), `update_*` and `delete_*` (204) keyed by path. Handlers
//! validate and decode synthetic ids at the boundary, convert API models to
//! database requests, and run a repository call on a pooled connection.
//! Errors surface as [`crate::errors::Error`], which renders JSON
//! `{"error": …}` with the matching status code.

pub mod classrooms;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exam_students;
pub mod exams;
pub mod hostel_admins;
pub mod hostels;
pub mod instructors;
pub mod rooms;
pub mod sections;
pub mod stats;
pub mod static_assets;
pub mod students;
pub mod time_slots;
