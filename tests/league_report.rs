use std::fs;
use std::path::PathBuf;

use league_desk::league::{LeagueSnapshot, LeagueSource};
use league_desk::report::{LeagueReport, ReportOptions, roster_sheet};
use league_desk::report_export::{export_report, export_roster};
use league_desk::snapshot::{self, parse_snapshot_json};
use league_desk::{compute_sanctioned_players, compute_scorers, compute_standings};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_league() -> LeagueSnapshot {
    parse_snapshot_json(&read_fixture("league_snapshot.json")).expect("fixture should parse")
}

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("league_desk_test_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join(name)
}

#[test]
fn fixture_standings_skip_deleted_team_match() {
    let league = fixture_league();

    let rows = compute_standings(league.teams(), league.matches());

    let table: Vec<(&str, u32, i64, u32)> = rows
        .iter()
        .map(|r| (r.team_name.as_str(), r.played, r.goal_diff, r.points))
        .collect();
    assert_eq!(
        table,
        vec![
            ("Los Pumas", 2, 1, 4),
            ("Real Quito", 2, 0, 2),
            ("Estrella Roja", 1, 0, 1),
            ("Union Sur", 1, -1, 0),
        ]
    );
}

#[test]
fn fixture_scorers_attach_jerseys() {
    let league = fixture_league();

    let scorers = compute_scorers(league.matches(), league.players());

    let summary: Vec<(&str, &str, u32, Option<u32>)> = scorers
        .iter()
        .map(|s| {
            (
                s.player_name.as_str(),
                s.team_name.as_str(),
                s.goals,
                s.jersey_number,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Juan", "Los Pumas", 3, Some(9)),
            ("Luis", "Union Sur", 1, Some(10)),
            ("Mario", "Real Quito", 1, None),
        ]
    );
}

#[test]
fn fixture_flags_load_from_integer_columns() {
    let league = fixture_league();

    let sanctioned = compute_sanctioned_players(league.players());
    let names: Vec<&str> = sanctioned.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pedro", "Luis"]);
}

#[test]
fn report_defaults_to_latest_matchday() {
    let league = fixture_league();

    let report = LeagueReport::build(&league, ReportOptions::default());

    assert_eq!(report.title, "AFEMEC - SENIOR");
    assert_eq!(report.subtitle, "INFORME DE LA FECHA 2");
    assert_eq!(report.matchday, 2);
    // Kickoff order: the 10:00 match precedes the 12:00 one.
    let results: Vec<(&str, &str)> = report
        .results
        .iter()
        .map(|r| (r.team_a.as_str(), r.team_b.as_str()))
        .collect();
    assert_eq!(
        results,
        vec![("Equipo Eliminado", "Union Sur"), ("Los Pumas", "Real Quito")]
    );
    let round: Vec<(&str, u32)> = report
        .matchday_scorers
        .iter()
        .map(|s| (s.player_name.as_str(), s.goals))
        .collect();
    assert_eq!(round, vec![("Juan", 1), ("Mario", 1)]);
    assert_eq!(report.yellows.len(), 1);
    assert_eq!(report.yellows[0].player_name, "LUIS");
    assert_eq!(report.reds[0].team_name, "LOS PUMAS");
    assert_eq!(report.standings.len(), 4);
}

#[test]
fn report_honours_explicit_matchday_and_scorer_limit() {
    let league = fixture_league();

    let report = LeagueReport::build(
        &league,
        ReportOptions {
            matchday: Some(1),
            top_scorers: 1,
        },
    );

    assert_eq!(report.subtitle, "INFORME DE LA FECHA 1");
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.top_scorers.len(), 1);
    assert_eq!(report.matchday_scorers[0].player_name, "Juan");
    assert_eq!(report.matchday_scorers[0].goals, 2);

    let empty = LeagueReport::build(&LeagueSnapshot::new("Nueva"), ReportOptions::default());
    assert_eq!(empty.subtitle, "INFORME GENERAL");
    assert!(empty.results.is_empty());
}

#[test]
fn roster_sheet_marks_ineligible_players() {
    let league = fixture_league();

    let pumas = roster_sheet(league.players(), "Los Pumas");
    let statuses: Vec<(&str, &str)> = pumas.iter().map(|l| (l.name.as_str(), l.status)).collect();
    assert_eq!(statuses, vec![("JUAN", "HABILITADO"), ("PEDRO", "NO HABILITADO")]);

    let quito = roster_sheet(league.players(), "Real Quito");
    assert_eq!(quito.len(), 1);
    assert!(quito[0].registration_hold);
    assert_eq!(quito[0].status, "NO HABILITADO");

    assert!(roster_sheet(league.players(), "los pumas").is_empty());
}

#[test]
fn deleting_a_team_drops_its_rows_and_players() {
    let mut league = fixture_league();

    assert!(league.delete_team(2));
    assert!(!league.delete_team(2));

    assert!(league.players.iter().all(|p| p.team_id != 2));
    let rows = compute_standings(league.teams(), league.matches());
    assert_eq!(rows.len(), 3);
    let pumas = rows.iter().find(|r| r.team_name == "Los Pumas").expect("pumas row");
    assert_eq!((pumas.played, pumas.points), (1, 1));

    let scorers = compute_scorers(league.matches(), league.players());
    assert!(scorers.iter().all(|s| s.team_name != "Union Sur"));
}

#[test]
fn snapshot_round_trips_through_disk() {
    let mut league = fixture_league();
    league.set_league_name("  Liga Master ");
    let path = scratch_path("roundtrip.json");

    snapshot::save(&path, &league).expect("save should succeed");
    let loaded = snapshot::load(&path).expect("load should succeed");

    assert_eq!(loaded.league_name, "Liga Master");
    assert_eq!(loaded.teams, league.teams);
    assert_eq!(loaded.players, league.players);
    assert_eq!(loaded.matches, league.matches);

    let missing = snapshot::load_or_default(&scratch_path("missing.json")).expect("default");
    assert!(missing.teams.is_empty());
}

#[test]
fn snapshot_rejects_unknown_versions() {
    let raw = r#"{"version": 99, "league": {"teams": []}}"#;
    let err = parse_snapshot_json(raw).expect_err("version 99 should be refused");
    assert!(err.to_string().contains("unsupported snapshot version"));
}

#[test]
fn workbooks_are_written() {
    let league = fixture_league();
    let report = LeagueReport::build(&league, ReportOptions::default());

    let report_path = scratch_path("informe.xlsx");
    let summary = export_report(&report_path, &report).expect("report export");
    assert_eq!(summary.sheets, 6);
    assert!(report_path.exists());

    let roster_path = scratch_path("planilla.xlsx");
    let lines = roster_sheet(league.players(), "Los Pumas");
    let summary = export_roster(&roster_path, "Los Pumas", &lines).expect("roster export");
    assert_eq!(summary.sheets, 1);
    assert_eq!(summary.rows, 4 + lines.len());
}
