//! Logistics orders (shipments tracked by carrier)

include!(concat!(env!("OUT_DIR"), "/a006_logistics_order_metadata.rs"));
