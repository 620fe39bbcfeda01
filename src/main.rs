use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use env_logger::Env;
use log::warn;

use league_desk::config::LeagueConfig;
use league_desk::league::{LeagueSnapshot, LeagueSource};
use league_desk::report::{LeagueReport, ReportOptions, roster_sheet};
use league_desk::report_export::{export_report, export_roster};
use league_desk::sanctions::StatusField;
use league_desk::validate::{MatchSheet, NewPlayer};
use league_desk::{compute_sanctioned_players, compute_scorers, compute_standings, snapshot};

const USAGE: &str = "usage: league_desk <command> [--category NAME] [--snapshot PATH]

commands:
  standings
  scorers
  sanctions
  report [--matchday N] [--xlsx PATH]
  roster --team NAME [--xlsx PATH]
  add-team --name NAME [--logo URL]
  add-player --team ID --name NAME [--jersey N] [--cedula ID]
  record-match --sheet FILE
  set-status --player ID --field inscripcion|amarilla|roja --value on|off
  clear-sanction --player ID
  delete-team --id ID
  delete-player --id ID
  delete-match --id ID
  rename --name NAME";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Some(command) = args.first().map(String::as_str) else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut cfg = LeagueConfig::from_env();
    if let Some(category) = flag_value(&args, "--category") {
        cfg.category = category.to_lowercase();
    }
    let path = flag_value(&args, "--snapshot")
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.snapshot_path());

    let mut league = snapshot::load_or_default(&path)?;
    if league.teams.is_empty() && league.matches.is_empty() {
        league.league_name = cfg.league_name.clone();
    }

    let dirty = match command {
        "standings" => {
            print_standings(&league);
            false
        }
        "scorers" => {
            print_scorers(&league, cfg.top_scorers);
            false
        }
        "sanctions" => {
            print_sanctions(&league);
            false
        }
        "report" => {
            let matchday = flag_value(&args, "--matchday")
                .map(|raw| raw.parse::<u32>().context("--matchday must be a number"))
                .transpose()?;
            let built = LeagueReport::build(
                &league,
                ReportOptions {
                    matchday,
                    top_scorers: cfg.top_scorers,
                },
            );
            print_report(&built);
            if let Some(out) = flag_value(&args, "--xlsx") {
                let summary = export_report(&PathBuf::from(&out), &built)?;
                println!("Wrote {out} ({} sheets, {} rows)", summary.sheets, summary.rows);
            }
            false
        }
        "roster" => {
            let team = flag_value(&args, "--team").context("--team is required")?;
            let lines = roster_sheet(league.players(), &team);
            if lines.is_empty() {
                warn!("no players registered for team {team}");
            }
            for line in &lines {
                println!(
                    "{:>3}  {:<28} {:<12} {}",
                    line.jersey_number.map_or_else(|| "-".to_string(), |n| n.to_string()),
                    line.name,
                    line.cedula.as_deref().unwrap_or("-"),
                    line.status
                );
            }
            if let Some(out) = flag_value(&args, "--xlsx") {
                export_roster(&PathBuf::from(&out), &team, &lines)?;
                println!("Wrote {out}");
            }
            false
        }
        "add-team" => {
            let name = flag_value(&args, "--name").unwrap_or_default();
            let id = league.add_team(&name, flag_value(&args, "--logo"))?;
            println!("team {id} created");
            true
        }
        "add-player" => {
            let team_id = parse_id(&args, "--team")?;
            let new = NewPlayer {
                name: flag_value(&args, "--name").unwrap_or_default(),
                cedula: flag_value(&args, "--cedula"),
                jersey_number: flag_value(&args, "--jersey").and_then(|v| v.parse().ok()),
                ..NewPlayer::default()
            };
            let id = league.add_player(team_id, new)?;
            println!("player {id} created");
            true
        }
        "record-match" => {
            let sheet_path = flag_value(&args, "--sheet").context("--sheet is required")?;
            let raw = fs::read_to_string(&sheet_path)
                .with_context(|| format!("read match sheet {sheet_path}"))?;
            let sheet: MatchSheet = serde_json::from_str(&raw).context("invalid match sheet json")?;
            let id = league.record_match(sheet.into_new_match()?)?;
            println!("match {id} recorded");
            true
        }
        "set-status" => {
            let id = parse_id(&args, "--player")?;
            let field: StatusField = flag_value(&args, "--field")
                .context("--field is required")?
                .parse()?;
            let on = match flag_value(&args, "--value").as_deref() {
                Some("on" | "1" | "true") => true,
                Some("off" | "0" | "false") => false,
                other => return Err(anyhow!("--value must be on or off, got {other:?}")),
            };
            league.set_player_status(id, field, on)?;
            println!("player {id}: {field} = {on}");
            true
        }
        "clear-sanction" => {
            let id = parse_id(&args, "--player")?;
            league.clear_sanction(id)?;
            true
        }
        "delete-team" => {
            let id = parse_id(&args, "--id")?;
            report_deleted("team", id, league.delete_team(id))
        }
        "delete-player" => {
            let id = parse_id(&args, "--id")?;
            report_deleted("player", id, league.delete_player(id))
        }
        "delete-match" => {
            let id = parse_id(&args, "--id")?;
            report_deleted("match", id, league.delete_match(id))
        }
        "rename" => {
            league.set_league_name(&flag_value(&args, "--name").unwrap_or_default());
            true
        }
        other => {
            eprintln!("unknown command: {other}\n\n{USAGE}");
            false
        }
    };

    if dirty {
        snapshot::save(&path, &league)?;
    }
    Ok(())
}

fn report_deleted(kind: &str, id: u32, removed: bool) -> bool {
    if removed {
        println!("{kind} {id} deleted");
    } else {
        warn!("{kind} {id} not found");
    }
    removed
}

fn print_standings(league: &LeagueSnapshot) {
    println!(
        "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#", "Equipo", "PJ", "PG", "PE", "PP", "GF", "GC", "DG", "PTS"
    );
    for (idx, row) in compute_standings(league.teams(), league.matches()).iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            idx + 1,
            row.team_name,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_diff,
            row.points
        );
    }
}

fn print_scorers(league: &LeagueSnapshot, limit: usize) {
    for (idx, entry) in compute_scorers(league.matches(), league.players())
        .iter()
        .take(limit)
        .enumerate()
    {
        println!(
            "{:>3}  {:<30} {:<24} {:>3}",
            idx + 1,
            entry.display_name(),
            entry.team_name,
            entry.goals
        );
    }
}

fn print_sanctions(league: &LeagueSnapshot) {
    let sanctioned = compute_sanctioned_players(league.players());
    if sanctioned.is_empty() {
        println!("No hay jugadores con sanciones pendientes.");
        return;
    }
    for p in &sanctioned {
        println!(
            "{:>4}  {:<28} {:<24} {:<8} {}",
            p.id,
            p.name,
            p.team_name.as_deref().unwrap_or("-"),
            if p.yellow.is_sanctioned() { "amarilla" } else { "-" },
            if p.red.is_sanctioned() { "roja" } else { "-" }
        );
    }
}

fn print_report(built: &LeagueReport) {
    println!("{}", built.title);
    println!("{}", built.subtitle);
    if !built.results.is_empty() {
        println!();
        for line in &built.results {
            println!("{} {} vs {} {}", line.team_a, line.score_a, line.team_b, line.score_b);
        }
    }
    println!();
    for (idx, row) in built.standings.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>4} pts  DG {:>3}",
            idx + 1,
            row.team_name.to_uppercase(),
            row.points,
            row.goal_diff
        );
    }
    println!();
    for entry in &built.matchday_scorers {
        println!(
            "  {} ({}) {}",
            entry.player_name.to_uppercase(),
            entry.team_name.to_uppercase(),
            entry.goals
        );
    }
    println!(
        "\nGoleadores: {}  Amarillas: {}  Rojas: {}",
        built.top_scorers.len(),
        built.yellows.len(),
        built.reds.len()
    );
}

fn parse_id(args: &[String], flag: &str) -> Result<u32> {
    flag_value(args, flag)
        .with_context(|| format!("{flag} is required"))?
        .parse::<u32>()
        .with_context(|| format!("{flag} must be a number"))
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
