//! Job postings

include!(concat!(env!("OUT_DIR"), "/a005_job_metadata.rs"));
