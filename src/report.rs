use serde::Serialize;

use crate::league::LeagueSource;
use crate::matchday::{compute_matchday_scorers, latest_matchday, matches_for_matchday};
use crate::model::{Match, Player};
use crate::sanctions::{red_carded, yellow_carded};
use crate::scorers::{ScorerEntry, compute_scorers};
use crate::standings::{StandingsRow, compute_standings};

pub const DELETED_TEAM_LABEL: &str = "Equipo Eliminado";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Round to report on; defaults to the latest one recorded.
    pub matchday: Option<u32>,
    pub top_scorers: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            matchday: None,
            top_scorers: crate::config::DEFAULT_TOP_SCORERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    pub team_a: String,
    pub score_a: i32,
    pub team_b: String,
    pub score_b: i32,
    pub date: Option<String>,
}

impl ResultLine {
    fn from_match(m: &Match) -> Self {
        Self {
            team_a: m.team_a.clone().unwrap_or_else(|| DELETED_TEAM_LABEL.to_string()),
            score_a: m.score_a,
            team_b: m.team_b.clone().unwrap_or_else(|| DELETED_TEAM_LABEL.to_string()),
            score_b: m.score_b,
            date: m.date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLine {
    pub player_name: String,
    pub team_name: String,
}

impl CardLine {
    fn from_player(p: &Player) -> Self {
        Self {
            player_name: p.name.to_uppercase(),
            team_name: p.team_name.clone().unwrap_or_default().to_uppercase(),
        }
    }
}

/// Everything the printable summary shows, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueReport {
    pub title: String,
    pub subtitle: String,
    pub matchday: u32,
    pub results: Vec<ResultLine>,
    pub standings: Vec<StandingsRow>,
    pub top_scorers: Vec<ScorerEntry>,
    pub yellows: Vec<CardLine>,
    pub reds: Vec<CardLine>,
    pub matchday_scorers: Vec<ScorerEntry>,
}

impl LeagueReport {
    pub fn build(source: &impl LeagueSource, opts: ReportOptions) -> Self {
        let matches = source.matches();
        let players = source.players();
        let matchday = opts.matchday.unwrap_or_else(|| latest_matchday(matches));

        let mut round: Vec<&Match> = matches_for_matchday(matches, matchday);
        // Undated matches go last; otherwise kickoff order, ties by input order.
        round.sort_by_key(|m| {
            let kickoff = m.kickoff();
            (kickoff.is_none(), kickoff)
        });

        let mut top_scorers = compute_scorers(matches, players);
        top_scorers.truncate(opts.top_scorers);

        Self {
            title: source.league_name().to_uppercase(),
            subtitle: subtitle_for(matchday),
            matchday,
            results: round.into_iter().map(ResultLine::from_match).collect(),
            standings: compute_standings(source.teams(), matches),
            top_scorers,
            yellows: yellow_carded(players).into_iter().map(CardLine::from_player).collect(),
            reds: red_carded(players).into_iter().map(CardLine::from_player).collect(),
            matchday_scorers: compute_matchday_scorers(matches, matchday),
        }
    }
}

pub fn subtitle_for(matchday: u32) -> String {
    if matchday > 0 {
        format!("INFORME DE LA FECHA {matchday}")
    } else {
        "INFORME GENERAL".to_string()
    }
}

/// One row of a team's printable match-day roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterLine {
    pub jersey_number: Option<u32>,
    pub name: String,
    pub cedula: Option<String>,
    pub registration_hold: bool,
    pub yellow: bool,
    pub red: bool,
    pub status: &'static str,
}

/// Roster for the team with this exact name, in roster order.
pub fn roster_sheet(players: &[Player], team_name: &str) -> Vec<RosterLine> {
    players
        .iter()
        .filter(|p| p.team_name.as_deref() == Some(team_name))
        .map(|p| RosterLine {
            jersey_number: p.jersey_number,
            name: p.name.to_uppercase(),
            cedula: p.cedula.clone(),
            registration_hold: p.registration_hold,
            yellow: p.yellow.is_sanctioned(),
            red: p.red.is_sanctioned(),
            status: p.eligibility().label(),
        })
        .collect()
}
