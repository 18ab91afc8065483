//! API models for students.
//!
//! A student's housing is exposed as an optional `room_id` synthetic string;
//! the conversions here decode it into the `(hostel_id, room_number)` storage
//! pair, which is why these conversions are fallible while every other
//! entity's are plain `From` impls.

use crate::db::models::students::{StudentCreateDBRequest, StudentDBResponse, StudentUpdateDBRequest};
use crate::keys::{KeyError, RoomKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn decode_room(room_id: Option<&str>) -> Result<(Option<i32>, Option<String>), KeyError> {
    match room_id {
        Some(id) => {
            let key: RoomKey = id.parse()?;
            Ok((Some(key.hostel_id), Some(key.room_number)))
        }
        None => Ok((None, None)),
    }
}

/// Request body for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    /// Caller-supplied numeric identifier (natural key)
    pub student_id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    /// Assigned hostel room as a synthetic id, `{hostel_id}-{room_number}`
    #[schema(example = "1-12")]
    pub room_id: Option<String>,
}

impl StudentCreate {
    /// Decode the synthetic `room_id` into storage columns.
    pub fn into_db(self) -> Result<StudentCreateDBRequest, KeyError> {
        let (hostel_id, room_number) = decode_room(self.room_id.as_deref())?;
        Ok(StudentCreateDBRequest {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            dept_name: self.dept_name,
            hostel_id,
            room_number,
        })
    }
}

/// Request body for updating a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentUpdate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    #[schema(example = "1-12")]
    pub room_id: Option<String>,
}

impl StudentUpdate {
    /// Decode the synthetic `room_id` into storage columns.
    pub fn into_db(self) -> Result<StudentUpdateDBRequest, KeyError> {
        let (hostel_id, room_number) = decode_room(self.room_id.as_deref())?;
        Ok(StudentUpdateDBRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            dept_name: self.dept_name,
            hostel_id,
            room_number,
        })
    }
}

/// Student details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub dept_name: Option<String>,
    /// Assigned hostel room, if any, as a synthetic id
    pub room_id: Option<String>,
}

impl From<StudentDBResponse> for StudentResponse {
    fn from(db: StudentDBResponse) -> Self {
        let room_id = match (db.hostel_id, db.room_number) {
            (Some(hostel_id), Some(room_number)) => Some(RoomKey { hostel_id, room_number }.to_string()),
            _ => None,
        };
        Self {
            student_id: db.student_id,
            first_name: db.first_name,
            last_name: db.last_name,
            phone: db.phone,
            date_of_birth: db.date_of_birth,
            dept_name: db.dept_name,
            room_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_decodes_into_storage_pair() {
        let create = StudentCreate {
            student_id: 7,
            first_name: "Mira".to_string(),
            last_name: None,
            phone: None,
            date_of_birth: None,
            dept_name: None,
            room_id: Some("3-12B".to_string()),
        };
        let db = create.into_db().unwrap();
        assert_eq!(db.hostel_id, Some(3));
        assert_eq!(db.room_number.as_deref(), Some("12B"));
    }

    #[test]
    fn malformed_room_id_is_rejected_before_storage() {
        let create = StudentCreate {
            student_id: 7,
            first_name: "Mira".to_string(),
            last_name: None,
            phone: None,
            date_of_birth: None,
            dept_name: None,
            room_id: Some("nope".to_string()),
        };
        assert!(create.into_db().is_err());
    }

    #[test]
    fn unhoused_row_renders_null_room_id() {
        let response = StudentResponse::from(StudentDBResponse {
            student_id: 9,
            first_name: "Dev".to_string(),
            last_name: None,
            phone: None,
            date_of_birth: None,
            dept_name: None,
            hostel_id: None,
            room_number: None,
        });
        assert!(response.room_id.is_none());
    }
}
