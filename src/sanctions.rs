use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::model::{CardState, Match, Player};
use crate::validate::ValidationError;

/// Player flags the admin UI is allowed to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Inscripcion,
    Amarilla,
    Roja,
}

impl StatusField {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusField::Inscripcion => "inscripcion",
            StatusField::Amarilla => "amarilla",
            StatusField::Roja => "roja",
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inscripcion" => Ok(StatusField::Inscripcion),
            "amarilla" => Ok(StatusField::Amarilla),
            "roja" => Ok(StatusField::Roja),
            other => Err(ValidationError::UnknownStatusField(other.to_string())),
        }
    }
}

impl Player {
    pub fn set_status(&mut self, field: StatusField, on: bool) {
        match field {
            StatusField::Inscripcion => self.registration_hold = on,
            StatusField::Amarilla => self.yellow = CardState::from(on),
            StatusField::Roja => self.red = CardState::from(on),
        }
    }

    pub fn status(&self, field: StatusField) -> bool {
        match field {
            StatusField::Inscripcion => self.registration_hold,
            StatusField::Amarilla => self.yellow.is_sanctioned(),
            StatusField::Roja => self.red.is_sanctioned(),
        }
    }
}

/// Players carrying an active yellow or red card, in roster order. Reads the
/// player flags only; match card lists are not recounted.
pub fn compute_sanctioned_players(players: &[Player]) -> Vec<Player> {
    players
        .iter()
        .filter(|p| p.has_active_card())
        .cloned()
        .collect()
}

pub fn yellow_carded(players: &[Player]) -> Vec<&Player> {
    players.iter().filter(|p| p.yellow.is_sanctioned()).collect()
}

pub fn red_carded(players: &[Player]) -> Vec<&Player> {
    players.iter().filter(|p| p.red.is_sanctioned()).collect()
}

/// Flag every player named in the match's card lists. Names must match
/// exactly within the side's team. Flags are only ever raised here.
/// Returns how many flags changed.
pub fn apply_match_cards(players: &mut [Player], m: &Match) -> usize {
    let mut changed = 0usize;
    for side in m.sides() {
        let booked = [
            (side.yellows, StatusField::Amarilla),
            (side.reds, StatusField::Roja),
        ];
        for (names, field) in booked {
            for name in names {
                for player in players
                    .iter_mut()
                    .filter(|p| p.team_id == side.team_id && p.name == *name)
                {
                    if !player.status(field) {
                        player.set_status(field, true);
                        changed += 1;
                    }
                }
            }
        }
    }
    if changed > 0 {
        debug!("match {}: {} card flags raised", m.id, changed);
    }
    changed
}

/// Mark a sanction as served. Registration holds are left alone.
pub fn clear_sanction(player: &mut Player) {
    player.yellow = CardState::Clear;
    player.red = CardState::Clear;
}
