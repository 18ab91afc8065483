//! Repository implementations for database access.
//!
//! One repository per entity, each wrapping a `&mut PgConnection` and
//! implementing the [`Repository`] trait: create, list, update-by-key,
//! delete-by-key. Entities whose storage key is composite take a typed key
//! (see [`crate::keys`]) so the synthetic-id decoding happens exactly once,
//! at the API boundary.
//!
//! Hostel-admin assignments are create/list/delete only and do not implement
//! the trait.

pub mod classrooms;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exam_students;
pub mod exams;
pub mod hostel_admins;
pub mod hostels;
pub mod instructors;
pub mod repository;
pub mod rooms;
pub mod sections;
pub mod students;
pub mod time_slots;

pub use classrooms::Classrooms;
pub use courses::Courses;
pub use departments::Departments;
pub use enrollments::Enrollments;
pub use exam_students::ExamStudents;
pub use exams::Exams;
pub use hostel_admins::HostelAdmins;
pub use hostels::Hostels;
pub use instructors::Instructors;
pub use repository::Repository;
pub use rooms::Rooms;
pub use sections::Sections;
pub use students::Students;
pub use time_slots::TimeSlots;
