//! Pages shared by every entity kind, driven by the kind's schema

pub mod api;
pub mod ui;

pub use api::{ApiError, EntityApi};
