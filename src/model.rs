use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type TeamId = u32;
pub type PlayerId = u32;
pub type MatchId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A recorded result. Scorer and card lists hold player display names; a
/// scorer's name appears once per goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    /// Resolved by the store; `None` once the team has been deleted.
    #[serde(default, rename = "equipoA")]
    pub team_a: Option<String>,
    #[serde(default, rename = "equipoB")]
    pub team_b: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub match_day: Option<u32>,
    #[serde(default)]
    pub score_a: i32,
    #[serde(default)]
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TeamA,
    TeamB,
    Draw,
}

/// One team's half of a match.
#[derive(Debug, Clone, Copy)]
pub struct MatchSide<'a> {
    pub team_id: TeamId,
    pub team_name: Option<&'a str>,
    pub scorers: &'a [String],
    pub yellows: &'a [String],
    pub reds: &'a [String],
}

impl Match {
    /// Matchday grouping; 0 means ungrouped.
    pub fn matchday(&self) -> u32 {
        self.match_day.unwrap_or(0)
    }

    pub fn outcome(&self) -> Outcome {
        if self.score_a > self.score_b {
            Outcome::TeamA
        } else if self.score_a < self.score_b {
            Outcome::TeamB
        } else {
            Outcome::Draw
        }
    }

    pub fn sides(&self) -> [MatchSide<'_>; 2] {
        [
            MatchSide {
                team_id: self.team_a_id,
                team_name: self.team_a.as_deref(),
                scorers: &self.scorers_a,
                yellows: &self.yellows_a,
                reds: &self.reds_a,
            },
            MatchSide {
                team_id: self.team_b_id,
                team_name: self.team_b.as_deref(),
                scorers: &self.scorers_b,
                yellows: &self.yellows_b,
                reds: &self.reds_b,
            },
        ]
    }

    /// Parses `date` as written by the admin form (`datetime-local`) or a
    /// bare calendar date.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Two-state card sanction flag. Set by recording a match, cleared only by
/// an explicit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Clear,
    Sanctioned,
}

impl CardState {
    pub fn is_sanctioned(self) -> bool {
        self == CardState::Sanctioned
    }
}

impl From<bool> for CardState {
    fn from(on: bool) -> Self {
        if on {
            CardState::Sanctioned
        } else {
            CardState::Clear
        }
    }
}

impl Serialize for CardState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_sanctioned())
    }
}

impl<'de> Deserialize<'de> for CardState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        flag::deserialize(deserializer).map(CardState::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Pending-registration hold.
    #[serde(default, rename = "inscripcion", with = "flag")]
    pub registration_hold: bool,
    #[serde(default, rename = "amarilla")]
    pub yellow: CardState,
    #[serde(default, rename = "roja")]
    pub red: CardState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Habilitado,
    NoHabilitado,
}

impl Eligibility {
    pub fn label(self) -> &'static str {
        match self {
            Eligibility::Habilitado => "HABILITADO",
            Eligibility::NoHabilitado => "NO HABILITADO",
        }
    }
}

impl Player {
    pub fn has_active_card(&self) -> bool {
        self.yellow.is_sanctioned() || self.red.is_sanctioned()
    }

    pub fn eligibility(&self) -> Eligibility {
        if self.registration_hold || self.has_active_card() {
            Eligibility::NoHabilitado
        } else {
            Eligibility::Habilitado
        }
    }
}

/// Status flags arrive either as JSON booleans or as SQLite-style 0/1.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Bool(on)) => on,
            Some(Raw::Int(n)) => n != 0,
            None => false,
        })
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }
}
