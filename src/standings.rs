use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Match, Team, TeamId};

pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_diff: i64,
    pub points: u32,
}

impl StandingsRow {
    fn zeroed(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    fn record(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += i64::from(scored);
        self.goals_against += i64::from(conceded);
        if scored > conceded {
            self.won += 1;
            self.points += POINTS_WIN;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += POINTS_DRAW;
        }
    }
}

/// Build the league table: one row per team, including teams that have not
/// played, ordered by points, goal difference, then goals for. Anything still
/// tied keeps the order of `teams`.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams.iter().map(StandingsRow::zeroed).collect();

    // Duplicate ids resolve to the first team listed.
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(teams.len());
    for (idx, team) in teams.iter().enumerate() {
        index.entry(team.id).or_insert(idx);
    }

    for m in matches {
        let (Some(&a), Some(&b)) = (index.get(&m.team_a_id), index.get(&m.team_b_id)) else {
            debug!(
                "standings: skipping match {} with unknown team ({} vs {})",
                m.id, m.team_a_id, m.team_b_id
            );
            continue;
        };
        rows[a].record(m.score_a, m.score_b);
        rows[b].record(m.score_b, m.score_a);
    }

    for row in &mut rows {
        row.goal_diff = row.goals_for - row.goals_against;
    }

    // `sort_by` is stable, so equal keys keep team-list order.
    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then(y.goal_diff.cmp(&x.goal_diff))
            .then(y.goals_for.cmp(&x.goals_for))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: TeamId, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            logo: None,
        }
    }

    #[test]
    fn record_classifies_result() {
        let mut row = StandingsRow::zeroed(&team(1, "A"));
        row.record(2, 1);
        row.record(0, 0);
        row.record(-1, 3);
        assert_eq!((row.won, row.drawn, row.lost), (1, 1, 1));
        assert_eq!(row.points, POINTS_WIN + POINTS_DRAW);
        assert_eq!((row.goals_for, row.goals_against), (1, 4));
    }
}
