//! API request and response data models.
//!
//! These structures define the public API contract: what each endpoint
//! accepts and returns. They are distinct from the database models in
//! [`crate::db::models`], which lets the external field names (`title`,
//! `room_number`, `instructor_id`) diverge from the storage columns they map
//! to (`course_name`, `room_no`, `id`).
//!
//! Entities stored under a composite key expose a single synthetic id field
//! (`room_id`, `section_id`, `enrollment_id`) assembled by [`crate::keys`];
//! the `From<…DBResponse>` conversions here are where those ids are encoded.
//! All models carry `utoipa` annotations for the generated OpenAPI document.

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
pub mod students;
pub mod time_slots;
