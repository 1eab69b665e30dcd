//! URL building utilities for API endpoints

fn competition_resource(api_base_url: &str, competition: &str, resource: &str) -> String {
    format!(
        "{}/competitions/{competition}/{resource}",
        api_base_url.trim_end_matches('/')
    )
}

/// Builds the standings URL for a competition.
///
/// # Example
/// ```
/// use football_tables::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.football-data.org/v4", "CL");
/// assert_eq!(url, "https://api.football-data.org/v4/competitions/CL/standings");
/// ```
pub fn build_standings_url(api_base_url: &str, competition: &str) -> String {
    competition_resource(api_base_url, competition, "standings")
}

/// Builds the match list URL for a competition.
///
/// # Example
/// ```
/// use football_tables::data_fetcher::api::build_matches_url;
///
/// let url = build_matches_url("https://api.football-data.org/v4/", "PL");
/// assert_eq!(url, "https://api.football-data.org/v4/competitions/PL/matches");
/// ```
pub fn build_matches_url(api_base_url: &str, competition: &str) -> String {
    competition_resource(api_base_url, competition, "matches")
}

/// Builds the top scorers URL for a competition.
///
/// # Example
/// ```
/// use football_tables::data_fetcher::api::build_scorers_url;
///
/// let url = build_scorers_url("http://localhost:8080", "CL");
/// assert_eq!(url, "http://localhost:8080/competitions/CL/scorers");
/// ```
pub fn build_scorers_url(api_base_url: &str, competition: &str) -> String {
    competition_resource(api_base_url, competition, "scorers")
}
