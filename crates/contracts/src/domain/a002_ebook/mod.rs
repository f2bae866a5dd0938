//! E-books sold through the store

include!(concat!(env!("OUT_DIR"), "/a002_ebook_metadata.rs"));
