//! Purchase orders placed with suppliers

include!(concat!(env!("OUT_DIR"), "/a011_purchase_order_metadata.rs"));
