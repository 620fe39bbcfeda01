use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::league::LeagueSnapshot;
use crate::model::TeamId;
use crate::validate::{NewMatch, NewPlayer, ValidationError};

const TEAM_NAMES: &[&str] = &[
    "Los Pumas",
    "Deportivo Central",
    "Atletico Norte",
    "Union Sur",
    "Real Quito",
    "Estrella Roja",
    "Juventud MEC",
    "Sporting Andes",
    "Independiente",
    "Club Amigos",
];

const FIRST_NAMES: &[&str] = &[
    "Juan", "Pedro", "Luis", "Carlos", "Jorge", "Miguel", "Diego", "Andres", "Jose", "Mario",
    "Raul", "Pablo",
];

const LAST_NAMES: &[&str] = &[
    "Perez", "Gomez", "Vera", "Mora", "Rios", "Paz", "Leon", "Cruz", "Soto", "Vega",
];

#[derive(Debug, Clone, Copy)]
pub struct FakeLeagueConfig {
    pub seed: u64,
    pub teams: usize,
    pub squad_size: usize,
    /// Full round-robin rounds to play; 0 leaves the fixture list empty.
    pub matchdays: usize,
    pub yellow_rate: f64,
    pub red_rate: f64,
}

impl Default for FakeLeagueConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            teams: 8,
            squad_size: 14,
            matchdays: 5,
            yellow_rate: 0.08,
            red_rate: 0.01,
        }
    }
}

/// Build a plausible league by going through the same entry points the admin
/// UI uses, so card flags end up raised exactly as they would in production.
pub fn generate(cfg: FakeLeagueConfig) -> Result<LeagueSnapshot, ValidationError> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut league = LeagueSnapshot::new("Liga de Prueba");

    let mut team_ids: Vec<TeamId> = Vec::with_capacity(cfg.teams);
    for idx in 0..cfg.teams {
        let name = match TEAM_NAMES.get(idx) {
            Some(name) => (*name).to_string(),
            None => format!("Equipo {}", idx + 1),
        };
        let team_id = league.add_team(&name, None)?;
        team_ids.push(team_id);
        for number in 1..=cfg.squad_size {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Juan");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Perez");
            league.add_player(
                team_id,
                NewPlayer {
                    name: format!("{first} {last}"),
                    cedula: Some(format!("17{:08}", rng.gen_range(0..100_000_000u32))),
                    jersey_number: u32::try_from(number).ok(),
                    ..NewPlayer::default()
                },
            )?;
        }
    }

    for (day_idx, pairs) in round_robin(&team_ids).into_iter().take(cfg.matchdays).enumerate() {
        let match_day = u32::try_from(day_idx + 1).unwrap_or(u32::MAX);
        for (a, b) in pairs {
            let new = fake_match(&mut rng, &league, &cfg, a, b, match_day);
            league.record_match(new)?;
        }
    }

    Ok(league)
}

fn fake_match(
    rng: &mut StdRng,
    league: &LeagueSnapshot,
    cfg: &FakeLeagueConfig,
    a: TeamId,
    b: TeamId,
    match_day: u32,
) -> NewMatch {
    let score_a = goals(rng);
    let score_b = goals(rng);
    let (scorers_a, yellows_a, reds_a) = side_events(rng, league, cfg, a, score_a);
    let (scorers_b, yellows_b, reds_b) = side_events(rng, league, cfg, b, score_b);
    NewMatch {
        team_a_id: Some(a),
        team_b_id: Some(b),
        date: Some(format!("2025-03-{:02}T10:00", (match_day % 28) + 1)),
        match_day: Some(match_day),
        score_a,
        score_b,
        scorers_a,
        scorers_b,
        yellows_a,
        yellows_b,
        reds_a,
        reds_b,
    }
}

// Weighted toward low scores the way amateur football tends to look.
fn goals(rng: &mut StdRng) -> i32 {
    match rng.gen_range(0..100) {
        0..=24 => 0,
        25..=54 => 1,
        55..=77 => 2,
        78..=90 => 3,
        91..=96 => 4,
        _ => 5,
    }
}

fn side_events(
    rng: &mut StdRng,
    league: &LeagueSnapshot,
    cfg: &FakeLeagueConfig,
    team_id: TeamId,
    goals: i32,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let squad: Vec<&str> = league
        .players_of_team(team_id)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    let mut scorers = Vec::new();
    let mut yellows = Vec::new();
    let mut reds = Vec::new();
    if squad.is_empty() {
        return (scorers, yellows, reds);
    }
    for _ in 0..goals.max(0) {
        if let Some(name) = squad.choose(rng) {
            scorers.push((*name).to_string());
        }
    }
    for name in &squad {
        if rng.gen_bool(cfg.yellow_rate.clamp(0.0, 1.0)) {
            yellows.push((*name).to_string());
        }
        if rng.gen_bool(cfg.red_rate.clamp(0.0, 1.0)) {
            reds.push((*name).to_string());
        }
    }
    (scorers, yellows, reds)
}

/// Circle-method pairings; an odd team count gets a bye each round.
pub fn round_robin(team_ids: &[TeamId]) -> Vec<Vec<(TeamId, TeamId)>> {
    let mut slots: Vec<Option<TeamId>> = team_ids.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let mut pairs = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) {
                pairs.push((a, b));
            }
        }
        rounds.push(pairs);
        // Keep the first slot fixed and rotate the rest.
        slots[1..].rotate_right(1);
    }
    rounds
}
