use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::Env;

use league_desk::config::LeagueConfig;
use league_desk::fake_league::{self, FakeLeagueConfig};
use league_desk::snapshot;

// Writes a synthetic league so the report commands have something to chew on.
fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let cfg = LeagueConfig::from_env();
    let out = arg_value(&args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.snapshot_path());

    let mut fake = FakeLeagueConfig::default();
    if let Some(seed) = arg_value(&args, "--seed") {
        fake.seed = seed.parse().context("--seed must be a number")?;
    }
    if let Some(teams) = arg_value(&args, "--teams") {
        fake.teams = teams.parse().context("--teams must be a number")?;
    }
    if let Some(days) = arg_value(&args, "--matchdays") {
        fake.matchdays = days.parse().context("--matchdays must be a number")?;
    }

    let mut league = fake_league::generate(fake)?;
    league.league_name = cfg.league_name.clone();
    snapshot::save(&out, &league)?;

    println!("Seeded league");
    println!("File: {}", out.display());
    println!("Teams: {}", league.teams.len());
    println!("Players: {}", league.players.len());
    println!("Matches: {}", league.matches.len());
    Ok(())
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.trim().to_string());
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
