include!(concat!(env!("OUT_DIR"), "/a004_freelancer_metadata.rs"));
