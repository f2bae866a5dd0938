pub mod entity;
pub mod schema;
