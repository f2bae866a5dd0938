//! Courses: instructor-led catalogue entries

include!(concat!(env!("OUT_DIR"), "/a001_course_metadata.rs"));
