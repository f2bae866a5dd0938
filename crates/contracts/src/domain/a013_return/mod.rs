//! Customer returns

include!(concat!(env!("OUT_DIR"), "/a013_return_metadata.rs"));
