pub mod common;
pub mod matches;
pub mod scorers;
pub mod standings;

pub use common::{CompetitionInfo, SeasonInfo, TeamRef, describe_competition};
pub use matches::{ApiGoal, ApiMatch, GoalPerson, MatchScore, MatchesResponse, ScoreLine};
pub use scorers::{Player, ScorerEntry, ScorersResponse};
pub use standings::{StandingGroup, StandingsResponse, TableEntry};
