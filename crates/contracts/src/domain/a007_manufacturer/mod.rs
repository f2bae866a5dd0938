include!(concat!(env!("OUT_DIR"), "/a007_manufacturer_metadata.rs"));
