use serde::{Deserialize, Serialize};

use crate::model::{PlayerId, TeamId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("both teams must be selected")]
    MissingTeam,

    #[error("a team cannot play against itself (team {0})")]
    SameTeam(TeamId),

    #[error("team name is required")]
    EmptyTeamName,

    #[error("player name is required")]
    EmptyPlayerName,

    #[error("unknown team {0}")]
    UnknownTeam(TeamId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("field not allowed: {0}")]
    UnknownStatusField(String),
}

/// A match as submitted, before it is given an id and resolved team names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    #[serde(default, rename = "equipoA")]
    pub team_a_id: Option<TeamId>,
    #[serde(default, rename = "equipoB")]
    pub team_b_id: Option<TeamId>,
    #[serde(default, rename = "fecha")]
    pub date: Option<String>,
    #[serde(default, rename = "matchDay")]
    pub match_day: Option<u32>,
    #[serde(default, rename = "scoreA")]
    pub score_a: i32,
    #[serde(default, rename = "scoreB")]
    pub score_b: i32,
    #[serde(default, rename = "scorersA")]
    pub scorers_a: Vec<String>,
    #[serde(default, rename = "scorersB")]
    pub scorers_b: Vec<String>,
    #[serde(default, rename = "yellowsA")]
    pub yellows_a: Vec<String>,
    #[serde(default, rename = "yellowsB")]
    pub yellows_b: Vec<String>,
    #[serde(default, rename = "redsA")]
    pub reds_a: Vec<String>,
    #[serde(default, rename = "redsB")]
    pub reds_b: Vec<String>,
}

impl NewMatch {
    /// Returns the two distinct team ids.
    pub fn validate(&self) -> Result<(TeamId, TeamId), ValidationError> {
        let (Some(a), Some(b)) = (self.team_a_id, self.team_b_id) else {
            return Err(ValidationError::MissingTeam);
        };
        if a == b {
            return Err(ValidationError::SameTeam(a));
        }
        Ok((a, b))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, rename = "jerseyNumber")]
    pub jersey_number: Option<u32>,
}

pub fn require_name(raw: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

/// One squad line of the match form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLine {
    pub name: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub yellow: bool,
    #[serde(default)]
    pub red: bool,
}

/// The match form: team selection, score and per-player squad lines for
/// each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSheet {
    pub team_a_id: Option<TeamId>,
    pub team_b_id: Option<TeamId>,
    pub date: Option<String>,
    pub match_day: Option<i64>,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    #[serde(default)]
    pub lines_a: Vec<SheetLine>,
    #[serde(default)]
    pub lines_b: Vec<SheetLine>,
}

impl MatchSheet {
    pub fn into_new_match(self) -> Result<NewMatch, ValidationError> {
        let (scorers_a, yellows_a, reds_a) = expand_lines(&self.lines_a);
        let (scorers_b, yellows_b, reds_b) = expand_lines(&self.lines_b);
        let out = NewMatch {
            team_a_id: self.team_a_id,
            team_b_id: self.team_b_id,
            date: self.date,
            match_day: Some(
                self.match_day
                    .filter(|d| *d > 0)
                    .and_then(|d| u32::try_from(d).ok())
                    .unwrap_or(1),
            ),
            score_a: self.score_a.unwrap_or(0),
            score_b: self.score_b.unwrap_or(0),
            scorers_a,
            scorers_b,
            yellows_a,
            yellows_b,
            reds_a,
            reds_b,
        };
        out.validate()?;
        Ok(out)
    }
}

type Expanded = (Vec<String>, Vec<String>, Vec<String>);

// A scorer's name is pushed once per goal so the ranking can count entries.
fn expand_lines(lines: &[SheetLine]) -> Expanded {
    let mut scorers = Vec::new();
    let mut yellows = Vec::new();
    let mut reds = Vec::new();
    for line in lines {
        for _ in 0..line.goals {
            scorers.push(line.name.clone());
        }
        if line.yellow {
            yellows.push(line.name.clone());
        }
        if line.red {
            reds.push(line.name.clone());
        }
    }
    (scorers, yellows, reds)
}
