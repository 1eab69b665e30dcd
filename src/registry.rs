//! Team registry shared by every export stage.
//!
//! Teams are keyed by their display name exactly as the API spells it. The
//! first sighting of a name allocates the next synthetic id (starting at 1);
//! later sightings return the same id and never update the stored record.
//! Distinct spellings of one club therefore become distinct teams.

use serde::Serialize;
use std::collections::HashMap;

/// One row of the `teams` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub team_id: u32,
    pub team_name: String,
    /// Identifier issued by the API, when the first sighting carried one.
    pub api_id: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    by_name: HashMap<String, u32>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the synthetic id for `name`, registering it on first sight.
    ///
    /// `api_id` is only recorded for new teams; a repeat call with a
    /// different `api_id` keeps the original value.
    pub fn resolve(&mut self, name: &str, api_id: Option<u64>) -> u32 {
        if let Some(&team_id) = self.by_name.get(name) {
            return team_id;
        }

        let team_id = self.next_id();
        self.teams.push(Team {
            team_id,
            team_name: name.to_string(),
            api_id,
        });
        self.by_name.insert(name.to_string(), team_id);
        team_id
    }

    fn next_id(&self) -> u32 {
        self.teams.len() as u32 + 1
    }

    /// Looks up a team without registering it.
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&Team> {
        self.by_name
            .get(name)
            .map(|&team_id| &self.teams[(team_id - 1) as usize])
    }

    /// All teams in ascending id order, which is first-sighting order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
