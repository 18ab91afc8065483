//! Database request/response models.
//!
//! `*CreateDBRequest` / `*UpdateDBRequest` carry storage-column values into a
//! repository; `*DBResponse` is the row shape coming back out. Conversions
//! from the API models in [`crate::api::models`] live next to the types they
//! produce, so the external-name to storage-column mapping for each entity is
//! written exactly once per direction.

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
pub mod students;
pub mod time_slots;
