use super::{ExportedTable, report_failure};
use crate::config::Config;
use crate::data_fetcher::api::build_standings_url;
use crate::data_fetcher::fetch;
use crate::data_fetcher::models::{SeasonInfo, StandingsResponse, describe_competition};
use crate::error::AppError;
use crate::export::{StandingRow, timestamp_now, write_table};
use crate::registry::TeamRegistry;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};

/// Maps the first standings group onto rows, resolving each team.
///
/// Only the first group (the league phase table) is used; any further
/// groups are ignored. `standing_id` follows the API's row order, the API's
/// own `position` is kept as data.
///
/// Returns `None` when the response has no standings groups at all.
pub fn build_standing_rows(
    response: &StandingsResponse,
    registry: &mut TeamRegistry,
) -> Option<Vec<StandingRow>> {
    let group = response.standings.as_ref()?.first()?;

    let rows = group
        .table
        .iter()
        .zip(1u32..)
        .map(|(entry, standing_id)| StandingRow {
            standing_id,
            team_id: registry.resolve(entry.team.display_name(), entry.team.id),
            position: entry.position,
            played: entry.played_games,
            won: entry.won,
            draw: entry.draw,
            lost: entry.lost,
            points: entry.points,
            goals_for: entry.goals_for,
            goals_against: entry.goals_against,
            goal_difference: entry.goal_difference,
        })
        .collect();

    Some(rows)
}

async fn try_export_standings(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> Result<Option<ExportedTable>, AppError> {
    let url = build_standings_url(&config.api_base_url, &config.competition);
    let response: StandingsResponse = fetch(client, &url, config.api_key.as_deref()).await?;

    info!(
        "Standings response for {} (season {}) with {} group(s)",
        describe_competition(response.competition.as_ref()),
        response
            .season
            .as_ref()
            .map_or_else(|| "unknown".to_string(), SeasonInfo::describe),
        response.standings.as_ref().map_or(0, Vec::len)
    );

    let mut staged = registry.clone();
    let Some(rows) = build_standing_rows(&response, &mut staged) else {
        return Ok(None);
    };

    let path = write_table(&config.output_dir(), &timestamp_now(), &rows)?;
    *registry = staged;

    Ok(Some(ExportedTable {
        path,
        rows: rows.len(),
    }))
}

/// Fetches the league phase standings and writes `standings_<ts>.csv`.
///
/// Returns the written path, or `None` when there was nothing to export or
/// the stage failed.
pub async fn export_standings(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> Option<PathBuf> {
    println!("Fetching standings data from API...");

    match try_export_standings(client, config, registry).await {
        Ok(Some(table)) => {
            info!("Wrote {} standings rows to {}", table.rows, table.path.display());
            println!("✓ Standings: {} teams", table.rows);
            Some(table.path)
        }
        Ok(None) => {
            warn!("Standings response contained no standings groups");
            println!("No standings data found");
            None
        }
        Err(e) => {
            report_failure("standings", &e);
            None
        }
    }
}
