use std::collections::HashSet;

use league_desk::compute_standings;
use league_desk::fake_league::{self, FakeLeagueConfig};
use league_desk::model::{Match, Outcome, Team};
use league_desk::standings::StandingsRow;

fn team(id: u32, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        logo: None,
    }
}

fn result(id: u32, a: &Team, b: &Team, score_a: i32, score_b: i32, match_day: u32) -> Match {
    Match {
        id,
        team_a_id: a.id,
        team_b_id: b.id,
        team_a: Some(a.name.clone()),
        team_b: Some(b.name.clone()),
        date: None,
        match_day: Some(match_day),
        score_a,
        score_b,
        scorers_a: Vec::new(),
        scorers_b: Vec::new(),
        yellows_a: Vec::new(),
        yellows_b: Vec::new(),
        reds_a: Vec::new(),
        reds_b: Vec::new(),
    }
}

fn row<'a>(rows: &'a [StandingsRow], name: &str) -> &'a StandingsRow {
    rows.iter()
        .find(|r| r.team_name == name)
        .expect("team should have a row")
}

fn names(rows: &[StandingsRow]) -> Vec<&str> {
    rows.iter().map(|r| r.team_name.as_str()).collect()
}

fn counters(r: &StandingsRow) -> (u32, u32, u32, u32, i64, i64, i64, u32) {
    (
        r.played,
        r.won,
        r.drawn,
        r.lost,
        r.goals_for,
        r.goals_against,
        r.goal_diff,
        r.points,
    )
}

#[test]
fn three_team_table_orders_by_goal_difference_on_equal_points() {
    let (a, b, c) = (team(1, "A"), team(2, "B"), team(3, "C"));
    let matches = vec![result(1, &a, &b, 2, 1, 1), result(2, &b, &c, 0, 0, 1)];

    let rows = compute_standings(&[a, b, c], &matches);

    assert_eq!(names(&rows), vec!["A", "C", "B"]);
    assert_eq!(counters(row(&rows, "A")), (1, 1, 0, 0, 2, 1, 1, 3));
    assert_eq!(counters(row(&rows, "C")), (1, 0, 1, 0, 0, 0, 0, 1));
    assert_eq!(counters(row(&rows, "B")), (2, 0, 1, 1, 1, 2, -1, 1));
}

#[test]
fn teams_without_matches_get_zero_rows_in_list_order() {
    let (a, b, c, d) = (team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D"));
    let matches = vec![result(1, &c, &d, 1, 0, 1)];

    let rows = compute_standings(&[a, b, c, d], &matches);

    // A and B keep list order; D's loss puts it last.
    assert_eq!(names(&rows), vec!["C", "A", "B", "D"]);
    assert_eq!(counters(row(&rows, "A")), (0, 0, 0, 0, 0, 0, 0, 0));
}

#[test]
fn goals_for_breaks_ties_after_goal_difference() {
    let (a, b, c, d) = (team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D"));
    let matches = vec![result(1, &a, &b, 1, 0, 1), result(2, &c, &d, 3, 2, 1)];

    let rows = compute_standings(&[a, b, c, d], &matches);

    assert_eq!(rows[0].team_name, "C");
    assert_eq!(rows[1].team_name, "A");
    // Losers tie on points and DG; D scored more.
    assert_eq!(rows[2].team_name, "D");
    assert_eq!(rows[3].team_name, "B");
}

#[test]
fn identical_records_keep_team_list_order() {
    let (a, b, c, d) = (team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D"));
    let forward = vec![result(1, &a, &c, 1, 1, 1), result(2, &b, &d, 1, 1, 1)];
    let reversed: Vec<Match> = forward.iter().rev().cloned().collect();

    let teams = [d.clone(), c.clone(), b.clone(), a.clone()];
    let first = compute_standings(&teams, &forward);
    let second = compute_standings(&teams, &reversed);

    assert_eq!(names(&first), vec!["D", "C", "B", "A"]);
    assert_eq!(first, second);
}

#[test]
fn matches_with_unknown_teams_are_skipped() {
    let (a, b) = (team(1, "A"), team(2, "B"));
    let ghost = team(99, "Ghost");
    let matches = vec![result(1, &ghost, &a, 5, 0, 1), result(2, &a, &b, 0, 1, 1)];

    let rows = compute_standings(&[a, b], &matches);

    assert_eq!(counters(row(&rows, "A")), (1, 0, 0, 1, 0, 1, -1, 0));
    assert_eq!(counters(row(&rows, "B")), (1, 1, 0, 0, 1, 0, 1, 3));
}

#[test]
fn negative_scores_are_taken_as_given() {
    let (a, b) = (team(1, "A"), team(2, "B"));
    let rows = compute_standings(&[a.clone(), b.clone()], &[result(1, &a, &b, -1, 0, 1)]);
    assert_eq!(counters(row(&rows, "B")), (1, 1, 0, 0, 0, -1, 1, 3));
}

#[test]
fn huge_scores_accumulate_without_overflow() {
    let (a, b) = (team(1, "A"), team(2, "B"));
    let matches = vec![
        result(1, &a, &b, 2_000_000_000, 0, 1),
        result(2, &a, &b, 2_000_000_000, 0, 2),
    ];

    let rows = compute_standings(&[a, b], &matches);

    let top = row(&rows, "A");
    assert_eq!(top.goals_for, 4_000_000_000);
    assert_eq!(top.goal_diff, top.goals_for - top.goals_against);
    let bottom = row(&rows, "B");
    assert_eq!(bottom.goal_diff, -4_000_000_000);
    assert_eq!(names(&rows), vec!["A", "B"]);
}

#[test]
fn synthetic_seasons_conserve_points_and_goal_difference() {
    for seed in 1..=20u64 {
        let league = fake_league::generate(FakeLeagueConfig {
            seed,
            teams: 7,
            squad_size: 5,
            matchdays: 7,
            ..FakeLeagueConfig::default()
        })
        .expect("synthetic league should build");

        let rows = compute_standings(&league.teams, &league.matches);
        assert_eq!(rows.len(), league.teams.len());

        let decisive = league
            .matches
            .iter()
            .filter(|m| m.outcome() != Outcome::Draw)
            .count() as u32;
        let drawn = league.matches.len() as u32 - decisive;
        let points: u32 = rows.iter().map(|r| r.points).sum();
        assert_eq!(points, 3 * decisive + 2 * drawn, "seed {seed}");

        for r in &rows {
            assert_eq!(r.goal_diff, r.goals_for - r.goals_against);
            assert_eq!(r.played, r.won + r.drawn + r.lost);
        }
        for pair in rows.windows(2) {
            let key = |r: &StandingsRow| (r.points, r.goal_diff, r.goals_for);
            assert!(key(&pair[0]) >= key(&pair[1]), "seed {seed}: table out of order");
        }
    }
}

#[test]
fn dropping_a_teams_matches_leaves_unrelated_rows_untouched() {
    let league = fake_league::generate(FakeLeagueConfig {
        seed: 42,
        teams: 8,
        squad_size: 4,
        matchdays: 2,
        ..FakeLeagueConfig::default()
    })
    .expect("synthetic league should build");
    let target = league.teams[0].id;

    let opponents: HashSet<u32> = league
        .matches
        .iter()
        .filter_map(|m| {
            if m.team_a_id == target {
                Some(m.team_b_id)
            } else if m.team_b_id == target {
                Some(m.team_a_id)
            } else {
                None
            }
        })
        .collect();
    let remaining: Vec<Match> = league
        .matches
        .iter()
        .filter(|m| m.team_a_id != target && m.team_b_id != target)
        .cloned()
        .collect();

    let before = compute_standings(&league.teams, &league.matches);
    let after = compute_standings(&league.teams, &remaining);

    for team in &league.teams {
        let b = before.iter().find(|r| r.team_id == team.id).expect("row before");
        let a = after.iter().find(|r| r.team_id == team.id).expect("row after");
        if team.id == target {
            assert_eq!(a.played, 0);
            assert_eq!(a.points, 0);
        } else if !opponents.contains(&team.id) {
            assert_eq!(counters(a), counters(b));
        }
    }
}
