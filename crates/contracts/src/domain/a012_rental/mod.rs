include!(concat!(env!("OUT_DIR"), "/a012_rental_metadata.rs"));
