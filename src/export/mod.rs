pub mod rows;
pub mod writer;

pub use rows::{CsvTable, GoalRow, MatchRow, ScorerRow, StandingRow};
pub use writer::{timestamp_now, write_table};
