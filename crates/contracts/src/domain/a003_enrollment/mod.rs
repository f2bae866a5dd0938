//! Enrollments of students into courses
//!
//! Student and course are referenced by free-text name, not by id.

include!(concat!(env!("OUT_DIR"), "/a003_enrollment_metadata.rs"));
