pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use fetch_utils::fetch;
pub use http_client::create_http_client;
// Re-export URL utilities
pub use urls::*;
