//! Row types of the exported tables.
//!
//! Field order is column order. `None` fields serialize as empty cells.

use crate::constants::tables;
use crate::registry::Team;
use serde::Serialize;

/// A row type that is written to its own `<NAME>_<timestamp>.csv` file.
pub trait CsvTable: Serialize {
    /// File name prefix
    const NAME: &'static str;
    /// Header row, identical to the serialized field names
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    /// 1-based position in output order, not the API's `position`
    pub standing_id: u32,
    pub team_id: u32,
    pub position: i32,
    pub played: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}

impl CsvTable for StandingRow {
    const NAME: &'static str = tables::STANDINGS;
    const HEADERS: &'static [&'static str] = &[
        "standing_id",
        "team_id",
        "position",
        "played",
        "won",
        "draw",
        "lost",
        "points",
        "goals_for",
        "goals_against",
        "goal_difference",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    /// The API's own match id
    pub match_id: u64,
    pub match_day: Option<u32>,
    pub date: String,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: String,
}

impl CsvTable for MatchRow {
    const NAME: &'static str = tables::MATCHES;
    const HEADERS: &'static [&'static str] = &[
        "match_id",
        "match_day",
        "date",
        "home_team_id",
        "away_team_id",
        "home_score",
        "away_score",
        "status",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalRow {
    /// Run-wide counter across all matches
    pub goal_id: u32,
    pub match_id: u64,
    pub team_id: u32,
    pub scorer_name: String,
    pub minute: Option<u32>,
    /// Running score after the goal, `home-away`
    pub score: String,
}

impl CsvTable for GoalRow {
    const NAME: &'static str = tables::GOALS;
    const HEADERS: &'static [&'static str] = &[
        "goal_id",
        "match_id",
        "team_id",
        "scorer_name",
        "minute",
        "score",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerRow {
    /// 1-based position in output order
    pub scorer_id: u32,
    pub player_name: String,
    pub team_id: u32,
    pub goals: u32,
    pub assists: u32,
    pub penalties: u32,
}

impl CsvTable for ScorerRow {
    const NAME: &'static str = tables::SCORERS;
    const HEADERS: &'static [&'static str] = &[
        "scorer_id",
        "player_name",
        "team_id",
        "goals",
        "assists",
        "penalties",
    ];
}

impl CsvTable for Team {
    const NAME: &'static str = tables::TEAMS;
    const HEADERS: &'static [&'static str] = &["team_id", "team_name", "api_id"];
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Header derived by csv from the struct's field names.
    fn derived_header<T: CsvTable>(row: &T) -> Vec<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(row).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap().to_string();
        header.split(',').map(str::to_string).collect()
    }

    fn assert_headers_match<T: CsvTable>(row: &T) {
        assert_eq!(derived_header(row), T::HEADERS.to_vec());
    }

    #[test]
    fn test_headers_match_field_names() {
        assert_headers_match(&StandingRow {
            standing_id: 1,
            team_id: 1,
            position: 1,
            played: 0,
            won: 0,
            draw: 0,
            lost: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        });
        assert_headers_match(&MatchRow {
            match_id: 1,
            match_day: None,
            date: String::new(),
            home_team_id: 1,
            away_team_id: 2,
            home_score: None,
            away_score: None,
            status: String::new(),
        });
        assert_headers_match(&GoalRow {
            goal_id: 1,
            match_id: 1,
            team_id: 1,
            scorer_name: String::new(),
            minute: None,
            score: String::new(),
        });
        assert_headers_match(&ScorerRow {
            scorer_id: 1,
            player_name: String::new(),
            team_id: 1,
            goals: 0,
            assists: 0,
            penalties: 0,
        });
        assert_headers_match(&Team {
            team_id: 1,
            team_name: String::new(),
            api_id: None,
        });
    }
}
