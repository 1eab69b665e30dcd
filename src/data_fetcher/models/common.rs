use serde::{Deserialize, Serialize};

/// Team reference as embedded in standings rows, matches, goals and scorers.
///
/// Both fields are nullable in the API: knockout fixtures whose participants
/// are not yet decided carry a team object with `null` id and name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TeamRef {
    /// Name used as the registry key. A missing name maps to the empty
    /// string, so every undecided participant shares one registry entry.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionInfo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonInfo {
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "currentMatchday", default)]
    pub current_matchday: Option<u32>,
}

impl SeasonInfo {
    /// `2024-09-17..2025-05-31, matchday 8` style label for log lines.
    pub fn describe(&self) -> String {
        let date = |d: &Option<String>| d.clone().unwrap_or_else(|| "?".to_string());
        let mut label = format!("{}..{}", date(&self.start_date), date(&self.end_date));
        if let Some(matchday) = self.current_matchday {
            label.push_str(&format!(", matchday {matchday}"));
        }
        label
    }
}

/// Short description of a response header for log lines, e.g. `UEFA Champions League (CL)`.
pub fn describe_competition(competition: Option<&CompetitionInfo>) -> String {
    match competition {
        Some(CompetitionInfo {
            name: Some(name),
            code: Some(code),
            ..
        }) => format!("{name} ({code})"),
        Some(CompetitionInfo {
            name: Some(name), ..
        }) => name.clone(),
        Some(CompetitionInfo {
            code: Some(code), ..
        }) => code.clone(),
        _ => "unknown competition".to_string(),
    }
}
