//! Football competition data exporter library
//!
//! Fetches standings, matches and top scorers for one competition from the
//! football-data.org v4 API and writes them as relational CSV tables. Every
//! table refers to teams through a surrogate `team_id` assigned by a single
//! [`TeamRegistry`](registry::TeamRegistry) shared across the run.
//!
//! # Examples
//!
//! ```rust,no_run
//! use football_tables::app::{print_summary, run_export};
//! use football_tables::config::Config;
//! use football_tables::data_fetcher::create_http_client;
//! use football_tables::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     config.require_api_key()?;
//!
//!     let client = create_http_client(config.http_timeout_seconds)?;
//!     let summary = run_export(&client, &config).await;
//!     print_summary(&summary);
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;
pub mod registry;
pub mod stages;

// Re-export commonly used types for convenience
pub use app::{ExportSummary, print_summary, run_export};
pub use config::Config;
pub use error::AppError;
pub use registry::{Team, TeamRegistry};
