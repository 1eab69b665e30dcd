use super::common::{CompetitionInfo, TeamRef};
use serde::{Deserialize, Serialize};

/// Response of `GET /competitions/{code}/scorers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorersResponse {
    #[serde(default)]
    pub competition: Option<CompetitionInfo>,
    #[serde(default)]
    pub scorers: Option<Vec<ScorerEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player: Player,
    pub team: TeamRef,
    #[serde(rename = "playedMatches", default)]
    pub played_matches: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}
