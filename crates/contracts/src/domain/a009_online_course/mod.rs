//! Self-paced online courses

include!(concat!(env!("OUT_DIR"), "/a009_online_course_metadata.rs"));
