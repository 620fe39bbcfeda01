use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Match, Player};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player_name: String,
    pub team_name: String,
    pub goals: u32,
    pub jersey_number: Option<u32>,
}

impl ScorerEntry {
    /// "Name (#9)" when the jersey is known.
    pub fn display_name(&self) -> String {
        match self.jersey_number {
            Some(n) => format!("{} (#{n})", self.player_name),
            None => self.player_name.clone(),
        }
    }
}

/// Season-wide goal ranking. Names are matched case-insensitively within a
/// team; the same name under two teams yields two entries. Ties keep the
/// order in which scorers were first seen.
pub fn compute_scorers(matches: &[Match], players: &[Player]) -> Vec<ScorerEntry> {
    tally_goals(matches.iter(), Some(players))
}

pub(crate) fn tally_goals<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    players: Option<&[Player]>,
) -> Vec<ScorerEntry> {
    let mut entries: Vec<ScorerEntry> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for m in matches {
        for side in m.sides() {
            let Some(team_name) = side.team_name else {
                if !side.scorers.is_empty() {
                    debug!(
                        "scorers: match {} side {} has no resolved team, {} goals ignored",
                        m.id,
                        side.team_id,
                        side.scorers.len()
                    );
                }
                continue;
            };
            for name in side.scorers {
                let key = (name.to_lowercase(), team_name.to_string());
                if let Some(&idx) = index.get(&key) {
                    entries[idx].goals += 1;
                    continue;
                }
                let jersey_number = players.and_then(|list| jersey_for(list, &key.0, team_name));
                index.insert(key, entries.len());
                entries.push(ScorerEntry {
                    player_name: name.clone(),
                    team_name: team_name.to_string(),
                    goals: 1,
                    jersey_number,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.goals.cmp(&a.goals));
    entries
}

// First match wins when a team lists two players under the same name.
fn jersey_for(players: &[Player], name_lower: &str, team_name: &str) -> Option<u32> {
    players
        .iter()
        .find(|p| p.team_name.as_deref() == Some(team_name) && p.name.to_lowercase() == name_lower)
        .and_then(|p| p.jersey_number)
}
