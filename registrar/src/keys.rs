//! Synthetic composite keys.
//!
//! Several tables have no single-column primary key (hostel rooms, sections,
//! enrollments), but the admin UI addresses every row by one opaque
//! identifier. The convention is a fixed-order join of the key columns with
//! `-`. This module is the only place that encodes or decodes those ids, so
//! the read path and the write path cannot drift apart.
//!
//! Reversibility requires that no component contains the separator. Rather
//! than documenting that as an unchecked precondition, [`validate_component`]
//! rejects offending values before they are ever persisted, and decoding
//! rejects keys that do not split into exactly the expected number of parts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Separator used between key components.
pub const SEPARATOR: char = '-';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    /// A key did not split into the expected number of parts.
    #[error("malformed key {key:?}: expected {expected} '-'-separated parts, found {found}")]
    WrongPartCount { key: String, expected: usize, found: usize },

    /// A key contained an empty component.
    #[error("malformed key {key:?}: empty component")]
    EmptyComponent { key: String },

    /// A numeric component failed to parse.
    #[error("malformed key {key:?}: {part:?} is not a valid {what}")]
    InvalidNumber { key: String, part: String, what: &'static str },

    /// A value offered as a key component contains the separator and would
    /// produce an irreversible id.
    #[error("{field} {value:?} must not contain '-'")]
    SeparatorInComponent { field: &'static str, value: String },
}

/// Check a value destined to become a key component.
///
/// Called at create time for every column that participates in a synthetic
/// id, so list responses can always be decoded back to the row they came
/// from.
pub fn validate_component(field: &'static str, value: &str) -> Result<(), KeyError> {
    if value.contains(SEPARATOR) {
        return Err(KeyError::SeparatorInComponent {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Split a synthetic key into exactly `expected` parts.
fn split(key: &str, expected: usize) -> Result<Vec<&str>, KeyError> {
    let parts: Vec<&str> = key.split(SEPARATOR).collect();
    if parts.len() != expected {
        return Err(KeyError::WrongPartCount {
            key: key.to_string(),
            expected,
            found: parts.len(),
        });
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err(KeyError::EmptyComponent { key: key.to_string() });
    }
    Ok(parts)
}

fn parse_i32(key: &str, part: &str, what: &'static str) -> Result<i32, KeyError> {
    part.parse().map_err(|_| KeyError::InvalidNumber {
        key: key.to_string(),
        part: part.to_string(),
        what,
    })
}

/// Key of a hostel room: `hostel_id-room_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomKey {
    pub hostel_id: i32,
    pub room_number: String,
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.hostel_id, SEPARATOR, self.room_number)
    }
}

impl FromStr for RoomKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split(s, 2)?;
        Ok(Self {
            hostel_id: parse_i32(s, parts[0], "hostel_id")?,
            room_number: parts[1].to_string(),
        })
    }
}

/// Key of a section: `course_id-sec_id-semester-year`.
///
/// The full natural key. Earlier revisions addressed sections by `sec_id`
/// alone, which silently targets the wrong row when two courses reuse a
/// section number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionKey {
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.course_id,
            self.sec_id,
            self.semester,
            self.year,
            sep = SEPARATOR
        )
    }
}

impl FromStr for SectionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split(s, 4)?;
        Ok(Self {
            course_id: parts[0].to_string(),
            sec_id: parts[1].to_string(),
            semester: parts[2].to_string(),
            year: parse_i32(s, parts[3], "year")?,
        })
    }
}

/// Key of an enrollment: `student_id-course_id-sec_id-semester-year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentKey {
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i32,
}

impl fmt::Display for EnrollmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.student_id,
            self.course_id,
            self.sec_id,
            self.semester,
            self.year,
            sep = SEPARATOR
        )
    }
}

impl FromStr for EnrollmentKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split(s, 5)?;
        Ok(Self {
            student_id: parse_i32(s, parts[0], "student_id")?,
            course_id: parts[1].to_string(),
            sec_id: parts[2].to_string(),
            semester: parts[3].to_string(),
            year: parse_i32(s, parts[4], "year")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_key_round_trips() {
        let key = RoomKey {
            hostel_id: 1,
            room_number: "12".to_string(),
        };
        let encoded = key.to_string();
        assert_eq!(encoded, "1-12");
        assert_eq!(encoded.parse::<RoomKey>().unwrap(), key);
    }

    #[test]
    fn enrollment_key_round_trips() {
        let key = EnrollmentKey {
            student_id: 5,
            course_id: "CS101".to_string(),
            sec_id: "1".to_string(),
            semester: "Fall".to_string(),
            year: 2024,
        };
        let encoded = key.to_string();
        assert_eq!(encoded, "5-CS101-1-Fall-2024");
        assert_eq!(encoded.parse::<EnrollmentKey>().unwrap(), key);
    }

    #[test]
    fn section_key_round_trips() {
        let key = SectionKey {
            course_id: "BIO301".to_string(),
            sec_id: "2".to_string(),
            semester: "Spring".to_string(),
            year: 2025,
        };
        assert_eq!(key.to_string().parse::<SectionKey>().unwrap(), key);
    }

    #[test]
    fn wrong_part_count_is_rejected() {
        let err = "1-12-extra".parse::<RoomKey>().unwrap_err();
        assert!(matches!(err, KeyError::WrongPartCount { expected: 2, found: 3, .. }));

        let err = "5-CS101-1-Fall".parse::<EnrollmentKey>().unwrap_err();
        assert!(matches!(err, KeyError::WrongPartCount { expected: 5, found: 4, .. }));
    }

    #[test]
    fn empty_component_is_rejected() {
        let err = "1-".parse::<RoomKey>().unwrap_err();
        assert!(matches!(err, KeyError::EmptyComponent { .. }));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = "abc-12".parse::<RoomKey>().unwrap_err();
        assert!(matches!(err, KeyError::InvalidNumber { .. }));
    }

    #[test]
    fn components_containing_separator_are_rejected() {
        assert!(validate_component("room_number", "A-12").is_err());
        assert!(validate_component("room_number", "A12").is_ok());
    }
}
