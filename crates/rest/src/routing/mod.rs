//! Route configuration.

mod api_routes;

pub use api_routes::create_routes;
