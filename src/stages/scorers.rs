use super::{ExportedTable, report_failure};
use crate::config::Config;
use crate::data_fetcher::api::build_scorers_url;
use crate::data_fetcher::fetch;
use crate::data_fetcher::models::{ScorerEntry, ScorersResponse, describe_competition};
use crate::error::AppError;
use crate::export::{ScorerRow, timestamp_now, write_table};
use crate::registry::TeamRegistry;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};

/// Maps scorer entries onto rows in API order; missing or null stats become 0.
pub fn build_scorer_rows(scorers: &[ScorerEntry], registry: &mut TeamRegistry) -> Vec<ScorerRow> {
    scorers
        .iter()
        .zip(1u32..)
        .map(|(scorer, scorer_id)| ScorerRow {
            scorer_id,
            player_name: scorer.player.name.clone(),
            team_id: registry.resolve(scorer.team.display_name(), scorer.team.id),
            goals: scorer.goals.unwrap_or(0),
            assists: scorer.assists.unwrap_or(0),
            penalties: scorer.penalties.unwrap_or(0),
        })
        .collect()
}

async fn try_export_scorers(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> Result<Option<ExportedTable>, AppError> {
    let url = build_scorers_url(&config.api_base_url, &config.competition);
    let response: ScorersResponse = fetch(client, &url, config.api_key.as_deref()).await?;

    let Some(scorers) = response.scorers else {
        return Ok(None);
    };
    info!(
        "Scorers response for {} with {} player(s)",
        describe_competition(response.competition.as_ref()),
        scorers.len()
    );

    let mut staged = registry.clone();
    let rows = build_scorer_rows(&scorers, &mut staged);
    let path = write_table(&config.output_dir(), &timestamp_now(), &rows)?;
    *registry = staged;

    Ok(Some(ExportedTable {
        path,
        rows: rows.len(),
    }))
}

/// Fetches the top scorer list and writes `scorers_<ts>.csv`.
pub async fn export_scorers(
    client: &Client,
    config: &Config,
    registry: &mut TeamRegistry,
) -> Option<PathBuf> {
    println!("Fetching scorers data from API...");

    match try_export_scorers(client, config, registry).await {
        Ok(Some(table)) => {
            info!("Wrote {} scorers to {}", table.rows, table.path.display());
            println!("✓ Scorers: {} players", table.rows);
            Some(table.path)
        }
        Ok(None) => {
            warn!("Scorers response contained no scorer list");
            println!("No scorers data found");
            None
        }
        Err(e) => {
            report_failure("scorers", &e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::{Player, TeamRef};
    use tempfile::tempdir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn scorer(name: &str, team: &str, goals: Option<u32>, assists: Option<u32>) -> ScorerEntry {
        ScorerEntry {
            player: Player {
                id: None,
                name: name.to_string(),
                nationality: None,
                section: None,
            },
            team: TeamRef {
                id: Some(team.len() as u64),
                name: Some(team.to_string()),
                ..Default::default()
            },
            played_matches: Some(8),
            goals,
            assists,
            penalties: None,
        }
    }

    #[test]
    fn test_scorer_rows_in_api_order_with_defaults() {
        let scorers = vec![
            scorer("Raphinha", "FC Barcelona", Some(12), Some(7)),
            scorer("Serhou Guirassy", "Borussia Dortmund", Some(13), None),
            scorer("Robert Lewandowski", "FC Barcelona", None, None),
        ];
        let mut registry = TeamRegistry::new();

        let rows = build_scorer_rows(&scorers, &mut registry);

        let ids: Vec<u32> = rows.iter().map(|r| r.scorer_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rows[0].team_id, rows[2].team_id);
        assert_eq!(rows[1].team_id, 2);
        assert_eq!((rows[1].goals, rows[1].assists, rows[1].penalties), (13, 0, 0));
        assert_eq!((rows[2].goals, rows[2].assists), (0, 0));
    }

    #[test]
    fn test_scorer_teams_reuse_existing_ids() {
        let mut registry = TeamRegistry::new();
        registry.resolve("Borussia Dortmund", Some(4));
        let rows = build_scorer_rows(
            &[scorer("Serhou Guirassy", "Borussia Dortmund", Some(13), None)],
            &mut registry,
        );
        assert_eq!(rows[0].team_id, 1);
        assert_eq!(registry.get("Borussia Dortmund").unwrap().api_id, Some(4));
    }

    #[tokio::test]
    async fn test_export_scorers_with_null_stats() {
        let mock_server = MockServer::start().await;
        let output = tempdir().unwrap();
        let config = Config {
            api_base_url: mock_server.uri(),
            output_dir: Some(output.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let client = create_test_http_client();

        let body = r#"{"scorers": [
            {"player": {"id": 1, "name": "Harry Kane"}, "team": {"id": 5, "name": "FC Bayern München"},
             "playedMatches": 12, "goals": 11, "assists": null, "penalties": 5}
        ]}"#;
        Mock::given(method("GET"))
            .and(path("/competitions/CL/scorers"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let mut registry = TeamRegistry::new();
        let written = export_scorers(&client, &config, &mut registry).await.unwrap();

        let content = std::fs::read_to_string(&written).unwrap();
        assert_eq!(
            content,
            "scorer_id,player_name,team_id,goals,assists,penalties\n1,Harry Kane,1,11,0,5\n"
        );
    }

    #[tokio::test]
    async fn test_export_scorers_missing_list_produces_no_file() {
        let mock_server = MockServer::start().await;
        let output = tempdir().unwrap();
        let config = Config {
            api_base_url: mock_server.uri(),
            output_dir: Some(output.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competitions/CL/scorers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let mut registry = TeamRegistry::new();
        assert!(export_scorers(&client, &config, &mut registry).await.is_none());
        assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_scorers_not_json() {
        let mock_server = MockServer::start().await;
        let output = tempdir().unwrap();
        let config = Config {
            api_base_url: mock_server.uri(),
            output_dir: Some(output.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competitions/CL/scorers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let mut registry = TeamRegistry::new();
        assert!(export_scorers(&client, &config, &mut registry).await.is_none());
        assert!(registry.is_empty());
    }
}
