//! Database models for students.
//!
//! The API-facing `room_id` is a synthetic `hostel_id-room_number` pair; by
//! the time a request reaches the database layer it has been decoded into the
//! two storage columns.

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating a student
#[derive(Debug, Clone)]
pub struct StudentCreateDBRequest {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}

/// Database request for updating a student
#[derive(Debug, Clone)]
pub struct StudentUpdateDBRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}

/// Database response for a student row
#[derive(Debug, Clone, FromRow)]
pub struct StudentDBResponse {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}
