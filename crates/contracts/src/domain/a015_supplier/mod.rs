//! Suppliers and vendors

include!(concat!(env!("OUT_DIR"), "/a015_supplier_metadata.rs"));
