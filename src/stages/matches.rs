use super::{ExportedTable, report_failure};
use crate::config::Config;
use crate::constants::tables::UNKNOWN_SCORER;
use crate::data_fetcher::api::build_matches_url;
use crate::data_fetcher::fetch;
use crate::data_fetcher::models::{ApiMatch, MatchesResponse, describe_competition};
use crate::error::AppError;
use crate::export::{GoalRow, MatchRow, timestamp_now, write_table};
use crate::registry::TeamRegistry;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};

/// Match and goal rows built from one match list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTables {
    pub matches: Vec<MatchRow>,
    pub goals: Vec<GoalRow>,
}

/// Maps matches onto match rows and flattens their goal events.
///
/// Goal ids run across the whole list, not per match. A goal is credited
/// to the home team when its team name equals the home team's name and to
/// the away team otherwise, including when the name matches neither side.
/// Names are compared before null maps to `""`: a goal without a team never
/// matches a home side whose name is null.
pub fn build_match_rows(matches: &[ApiMatch], registry: &mut TeamRegistry) -> MatchTables {
    let mut tables = MatchTables::default();
    let mut next_goal_id = 1u32;

    for m in matches {
        let home_team_id = registry.resolve(m.home_team.display_name(), m.home_team.id);
        let away_team_id = registry.resolve(m.away_team.display_name(), m.away_team.id);

        tables.matches.push(MatchRow {
            match_id: m.id,
            match_day: m.matchday,
            date: m.utc_date.clone(),
            home_team_id,
            away_team_id,
            home_score: m.score.full_time.home,
            away_score: m.score.full_time.away,
            status: m.status.clone(),
        });

        for goal in m.goals.iter().flatten() {
            let team_id = if goal.team_name() == m.home_team.name.as_deref() {
                home_team_id
            } else {
                away_team_id
            };

            tables.goals.push(GoalRow {
                goal_id: next_goal_id,
                match_id: m.id,
                team_id,
                scorer_name: goal.scorer_name().unwrap_or(UNKNOWN_SCORER).to_string(),
                minute: goal.minute,
                score: goal.score.map(|s| s.to_display()).unwrap_or_default(),
            });
            next_goal_id += 1;
        }
    }

    tables
}

/// Files written by the matches stage.
struct MatchExport {
    matches: ExportedTable,
    goals: Result<ExportedTable, AppError>,
}

async fn try_export_matches(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> Result<Option<MatchExport>, AppError> {
    let url = build_matches_url(&config.api_base_url, &config.competition);
    let response: MatchesResponse = fetch(client, &url, config.api_key.as_deref()).await?;

    let Some(matches) = response.matches else {
        return Ok(None);
    };
    info!(
        "Matches response for {} with {} match(es)",
        describe_competition(response.competition.as_ref()),
        matches.len()
    );

    let mut staged = registry.clone();
    let tables = build_match_rows(&matches, &mut staged);

    // Both files share one timestamp
    let timestamp = timestamp_now();
    let dir = config.output_dir();

    let matches_path = write_table(&dir, &timestamp, &tables.matches)?;
    *registry = staged;

    let goals = write_table(&dir, &timestamp, &tables.goals).map(|path| ExportedTable {
        path,
        rows: tables.goals.len(),
    });

    Ok(Some(MatchExport {
        matches: ExportedTable {
            path: matches_path,
            rows: tables.matches.len(),
        },
        goals,
    }))
}

/// Fetches the match list and writes `matches_<ts>.csv` and `goals_<ts>.csv`.
///
/// Returns the `(matches, goals)` paths; both are `None` when the response
/// has no match list or the fetch failed.
pub async fn export_matches(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> (Option<PathBuf>, Option<PathBuf>) {
    println!("Fetching matches data from API...");

    match try_export_matches(client, config, registry).await {
        Ok(Some(export)) => {
            println!("✓ Matches: {} matches", export.matches.rows);
            match export.goals {
                Ok(goals) => {
                    info!(
                        "Wrote {} matches and {} goals",
                        export.matches.rows, goals.rows
                    );
                    println!("✓ Goals: {} goals", goals.rows);
                    (Some(export.matches.path), Some(goals.path))
                }
                Err(e) => {
                    report_failure("goals", &e);
                    (Some(export.matches.path), None)
                }
            }
        }
        Ok(None) => {
            warn!("Matches response contained no match list");
            println!("No matches data found");
            (None, None)
        }
        Err(e) => {
            report_failure("matches", &e);
            (None, None)
        }
    }
}
