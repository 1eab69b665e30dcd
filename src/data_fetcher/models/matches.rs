use super::common::{CompetitionInfo, TeamRef};
use serde::{Deserialize, Serialize};

/// Response of `GET /competitions/{code}/matches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub competition: Option<CompetitionInfo>,
    #[serde(default)]
    pub matches: Option<Vec<ApiMatch>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMatch {
    pub id: u64,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    pub status: String,
    #[serde(default)]
    pub matchday: Option<u32>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamRef,
    pub score: MatchScore,
    /// Only present on plans that include match events.
    #[serde(default)]
    pub goals: Option<Vec<ApiGoal>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "fullTime")]
    pub full_time: ScoreLine,
}

/// Home/away goal pair; both sides are null before kick-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

impl ScoreLine {
    /// Renders the score as `home-away`, leaving a missing side blank.
    pub fn to_display(self) -> String {
        let side = |goals: Option<u32>| goals.map(|g| g.to_string()).unwrap_or_default();
        format!("{}-{}", side(self.home), side(self.away))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiGoal {
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(rename = "injuryTime", default)]
    pub injury_time: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub scorer: Option<GoalPerson>,
    #[serde(default)]
    pub assist: Option<GoalPerson>,
    /// Running score right after this goal.
    #[serde(default)]
    pub score: Option<ScoreLine>,
}

impl ApiGoal {
    /// Team name as reported on the goal event. A goal without a team object
    /// reports `Some("")`; a team object with a null name reports `None`.
    pub fn team_name(&self) -> Option<&str> {
        match &self.team {
            Some(team) => team.name.as_deref(),
            None => Some(""),
        }
    }

    pub fn scorer_name(&self) -> Option<&str> {
        self.scorer.as_ref().and_then(|s| s.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPerson {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}
