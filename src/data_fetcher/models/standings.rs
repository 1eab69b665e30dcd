use super::common::{CompetitionInfo, SeasonInfo, TeamRef};
use serde::{Deserialize, Serialize};

/// Response of `GET /competitions/{code}/standings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub competition: Option<CompetitionInfo>,
    #[serde(default)]
    pub season: Option<SeasonInfo>,
    /// One group per table; the league phase comes first, knockout or
    /// home/away splits may follow.
    #[serde(default)]
    pub standings: Option<Vec<StandingGroup>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingGroup {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub position: i32,
    pub team: TeamRef,
    #[serde(rename = "playedGames")]
    pub played_games: i32,
    #[serde(default)]
    pub form: Option<String>,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    #[serde(rename = "goalsFor")]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: i32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
}
