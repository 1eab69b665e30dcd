pub mod api;
pub mod models;

pub use api::{create_http_client, fetch};
