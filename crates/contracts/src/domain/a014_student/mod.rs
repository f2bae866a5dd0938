//! Students

include!(concat!(env!("OUT_DIR"), "/a014_student_metadata.rs"));
