use crate::config::Config;
use crate::constants::RELATIONSHIPS;
use crate::error::AppError;
use crate::registry::TeamRegistry;
use crate::stages::{
    export_matches, export_scorers, export_standings, export_teams, report_failure,
};
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;

/// Files produced by one export run. A `None` entry means that table was
/// not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub teams: Option<PathBuf>,
    pub standings: Option<PathBuf>,
    pub matches: Option<PathBuf>,
    pub goals: Option<PathBuf>,
    pub scorers: Option<PathBuf>,
    pub team_count: usize,
}

impl ExportSummary {
    /// `(table, path)` pairs in the order they are listed to the user.
    pub fn files(&self) -> [(&'static str, Option<&PathBuf>); 5] {
        [
            ("teams", self.teams.as_ref()),
            ("matches", self.matches.as_ref()),
            ("goals", self.goals.as_ref()),
            ("standings", self.standings.as_ref()),
            ("scorers", self.scorers.as_ref()),
        ]
    }

    pub fn produced_count(&self) -> usize {
        self.files().iter().filter(|(_, path)| path.is_some()).count()
    }
}

/// Runs every export stage in order: standings, matches and goals, scorers,
/// then the teams table built from everything the earlier stages saw.
///
/// Stage failures are reported by the stages themselves and never abort the
/// run; the teams table is always attempted.
pub async fn run_export(client: &Client, config: &Config) -> ExportSummary {
    let mut registry = TeamRegistry::new();

    let standings = export_standings(client, config, &mut registry).await;
    let (matches, goals) = export_matches(client, config, &mut registry).await;
    let scorers = export_scorers(client, config, &mut registry).await;
    let teams = export_teams(config, &registry);

    let summary = ExportSummary {
        teams,
        standings,
        matches,
        goals,
        scorers,
        team_count: registry.len(),
    };
    info!(
        "Export finished: {} of 5 tables written, {} teams registered",
        summary.produced_count(),
        summary.team_count
    );
    summary
}

/// Run used when no HTTP client could be built: every fetch stage is
/// reported as failed and only the empty teams table is written.
pub fn run_without_client(config: &Config, err: &AppError) -> ExportSummary {
    for stage in ["standings", "matches", "scorers"] {
        report_failure(stage, err);
    }
    let registry = TeamRegistry::new();
    ExportSummary {
        teams: export_teams(config, &registry),
        ..Default::default()
    }
}

/// Summary block listing the written files and the relationships between
/// tables, framed by `=` rules.
pub fn summary_text(summary: &ExportSummary) -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![String::new(), rule.clone()];
    lines.push("✓ All tables created with relationships:".to_string());
    for (table, path) in summary.files() {
        lines.push(match path {
            Some(path) => format!("     - {}", path.display()),
            None => format!("     - {table}: (not produced)"),
        });
    }
    lines.push(String::new());
    lines.push("Relationships:".to_string());
    lines.extend(RELATIONSHIPS.iter().map(|r| format!("  - {r}")));
    lines.push(rule);
    lines.join("\n")
}

pub fn print_summary(summary: &ExportSummary) {
    println!("{}", summary_text(summary));
}
