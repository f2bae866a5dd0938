pub mod route;
pub mod routes;

pub use route::{resolve_route_param, Route};
