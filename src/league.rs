use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::model::{CardState, Match, MatchId, Player, PlayerId, Team, TeamId};
use crate::sanctions::{StatusField, apply_match_cards, clear_sanction};
use crate::validate::{NewMatch, NewPlayer, ValidationError, require_name};

pub const DEFAULT_LEAGUE_NAME: &str = "Sistema de Liga";

/// Read side of the store. Matches and players come with team names
/// already resolved.
pub trait LeagueSource {
    fn league_name(&self) -> &str;
    fn teams(&self) -> &[Team];
    fn matches(&self) -> &[Match];
    fn players(&self) -> &[Player];
}

/// In-memory league: the records one category holds. Passed explicitly to
/// every computation; there is no process-wide copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default = "default_league_name")]
    pub league_name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub players: Vec<Player>,
}

fn default_league_name() -> String {
    DEFAULT_LEAGUE_NAME.to_string()
}

impl Default for LeagueSnapshot {
    fn default() -> Self {
        Self::new(DEFAULT_LEAGUE_NAME)
    }
}

impl LeagueSource for LeagueSnapshot {
    fn league_name(&self) -> &str {
        &self.league_name
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn matches(&self) -> &[Match] {
        &self.matches
    }

    fn players(&self) -> &[Player] {
        &self.players
    }
}

impl LeagueSnapshot {
    pub fn new(league_name: impl Into<String>) -> Self {
        Self {
            league_name: league_name.into(),
            teams: Vec::new(),
            matches: Vec::new(),
            players: Vec::new(),
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn players_of_team(&self, team_id: TeamId) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team_id == team_id).collect()
    }

    pub fn add_team(
        &mut self,
        name: &str,
        logo: Option<String>,
    ) -> Result<TeamId, ValidationError> {
        let name = require_name(name, ValidationError::EmptyTeamName)?;
        let id = next_id(self.teams.iter().map(|t| t.id));
        self.teams.push(Team { id, name, logo });
        Ok(id)
    }

    pub fn add_player(
        &mut self,
        team_id: TeamId,
        new: NewPlayer,
    ) -> Result<PlayerId, ValidationError> {
        let name = require_name(&new.name, ValidationError::EmptyPlayerName)?;
        let team_name = self
            .team(team_id)
            .map(|t| t.name.clone())
            .ok_or(ValidationError::UnknownTeam(team_id))?;
        let id = next_id(self.players.iter().map(|p| p.id));
        self.players.push(Player {
            id,
            name,
            team_id,
            team_name: Some(team_name),
            jersey_number: new.jersey_number,
            cedula: new.cedula,
            dob: new.dob,
            kind: new.kind,
            registration_hold: false,
            yellow: CardState::Clear,
            red: CardState::Clear,
        });
        Ok(id)
    }

    /// Store a result and raise the card flags of everyone booked in it.
    pub fn record_match(&mut self, new: NewMatch) -> Result<MatchId, ValidationError> {
        let (a, b) = new.validate()?;
        let team_a = self.team(a).ok_or(ValidationError::UnknownTeam(a))?.name.clone();
        let team_b = self.team(b).ok_or(ValidationError::UnknownTeam(b))?.name.clone();

        let id = next_id(self.matches.iter().map(|m| m.id));
        let m = Match {
            id,
            team_a_id: a,
            team_b_id: b,
            team_a: Some(team_a),
            team_b: Some(team_b),
            date: new.date,
            match_day: new.match_day,
            score_a: new.score_a,
            score_b: new.score_b,
            scorers_a: new.scorers_a,
            scorers_b: new.scorers_b,
            yellows_a: new.yellows_a,
            yellows_b: new.yellows_b,
            reds_a: new.reds_a,
            reds_b: new.reds_b,
        };
        let flagged = apply_match_cards(&mut self.players, &m);
        info!(
            "recorded match {id}: {} {}-{} {} (matchday {}, {flagged} card flags raised)",
            m.team_a.as_deref().unwrap_or("?"),
            m.score_a,
            m.score_b,
            m.team_b.as_deref().unwrap_or("?"),
            m.matchday()
        );
        self.matches.push(m);
        Ok(id)
    }

    /// Removes the team and its players. Old matches stay but lose the
    /// resolved team name, so they drop out of the derived tables.
    pub fn delete_team(&mut self, id: TeamId) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != id);
        if self.teams.len() == before {
            return false;
        }
        self.players.retain(|p| p.team_id != id);
        for m in &mut self.matches {
            if m.team_a_id == id {
                m.team_a = None;
            }
            if m.team_b_id == id {
                m.team_b = None;
            }
        }
        true
    }

    pub fn delete_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    pub fn delete_match(&mut self, id: MatchId) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        self.matches.len() != before
    }

    pub fn set_player_status(
        &mut self,
        id: PlayerId,
        field: StatusField,
        on: bool,
    ) -> Result<(), ValidationError> {
        let player = self.player_mut(id)?;
        player.set_status(field, on);
        Ok(())
    }

    pub fn clear_sanction(&mut self, id: PlayerId) -> Result<(), ValidationError> {
        let player = self.player_mut(id)?;
        clear_sanction(player);
        info!("sanction cleared for player {id} ({})", player.name);
        Ok(())
    }

    pub fn set_league_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("ignoring empty league name");
            return;
        }
        self.league_name = trimmed.to_string();
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, ValidationError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ValidationError::UnknownPlayer(id))
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
