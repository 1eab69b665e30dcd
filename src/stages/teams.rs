use super::report_failure;
use crate::config::Config;
use crate::export::{timestamp_now, write_table};
use crate::registry::TeamRegistry;
use std::path::PathBuf;
use tracing::info;

/// Writes every registered team to `teams_<ts>.csv` in id order.
///
/// Runs after all fetch stages so the table holds every team seen anywhere.
pub fn export_teams(config: &Config, registry: &TeamRegistry) -> Option<PathBuf> {
    match write_table(&config.output_dir(), &timestamp_now(), registry.teams()) {
        Ok(path) => {
            info!("Wrote {} teams to {}", registry.len(), path.display());
            println!("✓ Teams: {} teams", registry.len());
            Some(path)
        }
        Err(e) => {
            report_failure("teams", &e);
            None
        }
    }
}
