//! Application-wide constants
//!
//! Defaults, environment variable names and output file naming live here
//! so the rest of the crate never hard-codes them.

/// Default base URL of the football-data.org v4 API
pub const DEFAULT_API_BASE_URL: &str = "https://api.football-data.org/v4";

/// Default competition code (UEFA Champions League)
pub const DEFAULT_COMPETITION: &str = "CL";

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Name used for the config directory and default log file
pub const APP_NAME: &str = "football_tables";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "football_tables.log";

/// Environment variables that override config file values
pub mod env {
    /// Primary credential variable
    pub const API_KEY: &str = "API_KEY";

    /// Namespaced alternative to `API_KEY`
    pub const API_KEY_ALT: &str = "FOOTBALL_DATA_API_KEY";

    pub const API_BASE_URL: &str = "FOOTBALL_DATA_API_URL";

    pub const COMPETITION: &str = "FOOTBALL_DATA_COMPETITION";

    pub const OUTPUT_DIR: &str = "FOOTBALL_TABLES_OUTPUT_DIR";

    pub const LOG_FILE: &str = "FOOTBALL_TABLES_LOG_FILE";

    pub const HTTP_TIMEOUT: &str = "FOOTBALL_TABLES_HTTP_TIMEOUT";
}

/// Output table naming
pub mod tables {
    /// strftime pattern appended to every output file name
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

    pub const TEAMS: &str = "teams";
    pub const STANDINGS: &str = "standings";
    pub const MATCHES: &str = "matches";
    pub const GOALS: &str = "goals";
    pub const SCORERS: &str = "scorers";

    /// Scorer name written when a goal event has no scorer
    pub const UNKNOWN_SCORER: &str = "Unknown";
}

/// Foreign-key relationships between the exported tables, printed in the
/// run summary.
pub const RELATIONSHIPS: &[&str] = &[
    "matches.home_team_id → teams.team_id",
    "matches.away_team_id → teams.team_id",
    "goals.team_id → teams.team_id",
    "goals.match_id → matches.match_id",
    "standings.team_id → teams.team_id",
    "scorers.team_id → teams.team_id",
];
