//! Export stages.
//!
//! Each stage fetches one API resource, resolves teams through the shared
//! [`TeamRegistry`](crate::registry::TeamRegistry) and writes its table(s).
//! Failures never escape a stage: they are reported and the stage simply
//! produces no file.
//!
//! Stages resolve teams into a staged copy of the registry and commit it
//! only once a file referencing those teams has been written, so a failed
//! stage leaves the registry exactly as it found it.

pub mod matches;
pub mod scorers;
pub mod standings;
pub mod teams;

use crate::error::AppError;
use std::path::PathBuf;
use tracing::error;

pub use matches::{MatchTables, build_match_rows, export_matches};
pub use scorers::{build_scorer_rows, export_scorers};
pub use standings::{build_standing_rows, export_standings};
pub use teams::export_teams;

/// A table written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTable {
    pub path: PathBuf,
    pub rows: usize,
}

/// Prints and logs a stage failure.
pub(crate) fn report_failure(stage: &str, err: &AppError) {
    error!("Error fetching {stage}: {err}");
    println!("Error fetching {stage}: {err}");
    if err.is_auth_error() {
        println!("  The API rejected the token; check API_KEY and your plan's access to this competition.");
    } else if err.is_network_error() {
        println!("  Could not reach the API; check your network connection.");
    }
}
