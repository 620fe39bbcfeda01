use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::report::{CardLine, LeagueReport, ResultLine, RosterLine};
use crate::scorers::ScorerEntry;
use crate::standings::StandingsRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sheets: usize,
    pub rows: usize,
}

enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(f64::from(value))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Number(f64::from(value))
    }
}

type Rows = Vec<Vec<Cell>>;

/// Summary report workbook: round results, table, scorers, active cards and
/// round scorers, one sheet each.
pub fn export_report(path: &Path, report: &LeagueReport) -> Result<ExportSummary> {
    let mut header = vec![
        vec![Cell::from(report.title.as_str())],
        vec![Cell::from(report.subtitle.as_str())],
        Vec::new(),
        vec![
            Cell::from("Equipo A"),
            Cell::from("Goles A"),
            Cell::from("Equipo B"),
            Cell::from("Goles B"),
            Cell::from("Fecha"),
        ],
    ];
    header.extend(report.results.iter().map(result_row));

    let sheets: Vec<(&str, Rows)> = vec![
        ("Resultados", header),
        ("Posiciones", standings_rows(&report.standings)),
        ("Goleadores", scorer_rows(&report.top_scorers)),
        ("Amarillas", card_rows(&report.yellows)),
        ("Rojas", card_rows(&report.reds)),
        ("GoleadoresFecha", scorer_rows(&report.matchday_scorers)),
    ];
    save_workbook(path, &sheets)
}

/// Printable team roster with the eligibility column.
pub fn export_roster(path: &Path, team_name: &str, lines: &[RosterLine]) -> Result<ExportSummary> {
    let mut rows: Rows = vec![
        vec![Cell::from("PLANILLA DE JUEGO")],
        vec![Cell::from("EQUIPO"), Cell::from(team_name.to_uppercase())],
        Vec::new(),
        vec![
            Cell::from("N°"),
            Cell::from("Jugador"),
            Cell::from("C.I."),
            Cell::from("I"),
            Cell::from("A"),
            Cell::from("R"),
            Cell::from("Estado"),
            Cell::from("Firma"),
        ],
    ];
    for line in lines {
        rows.push(vec![
            line.jersey_number.map_or_else(|| Cell::from("-"), Cell::from),
            Cell::from(line.name.as_str()),
            Cell::from(line.cedula.clone().unwrap_or_else(|| "-".to_string())),
            mark(line.registration_hold),
            mark(line.yellow),
            mark(line.red),
            Cell::from(line.status),
            Cell::from(""),
        ]);
    }
    save_workbook(path, &[("Planilla", rows)])
}

fn save_workbook(path: &Path, sheets: &[(&str, Rows)]) -> Result<ExportSummary> {
    let mut workbook = Workbook::new();
    let mut total_rows = 0usize;
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name)?;
        write_rows(sheet, rows)?;
        total_rows = total_rows.saturating_add(rows.len());
    }
    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    info!("exported {} sheets to {}", sheets.len(), path.display());
    Ok(ExportSummary {
        sheets: sheets.len(),
        rows: total_rows,
    })
}

fn result_row(line: &ResultLine) -> Vec<Cell> {
    vec![
        Cell::from(line.team_a.as_str()),
        Cell::from(line.score_a),
        Cell::from(line.team_b.as_str()),
        Cell::from(line.score_b),
        Cell::from(line.date.clone().unwrap_or_default()),
    ]
}

fn standings_rows(rows: &[StandingsRow]) -> Rows {
    let mut out: Rows = vec![
        ["#", "Equipo", "PJ", "PG", "PE", "PP", "GF", "GC", "DG", "PTS"]
            .into_iter()
            .map(Cell::from)
            .collect(),
    ];
    for (idx, row) in rows.iter().enumerate() {
        out.push(vec![
            Cell::Number((idx + 1) as f64),
            Cell::from(row.team_name.to_uppercase()),
            Cell::from(row.played),
            Cell::from(row.won),
            Cell::from(row.drawn),
            Cell::from(row.lost),
            Cell::from(row.goals_for),
            Cell::from(row.goals_against),
            Cell::from(row.goal_diff),
            Cell::from(row.points),
        ]);
    }
    out
}

fn scorer_rows(entries: &[ScorerEntry]) -> Rows {
    let mut out: Rows = vec![
        ["#", "Jugador", "Equipo", "Goles"]
            .into_iter()
            .map(Cell::from)
            .collect(),
    ];
    for (idx, entry) in entries.iter().enumerate() {
        out.push(vec![
            Cell::Number((idx + 1) as f64),
            Cell::from(entry.display_name().to_uppercase()),
            Cell::from(entry.team_name.to_uppercase()),
            Cell::from(entry.goals),
        ]);
    }
    out
}

fn card_rows(lines: &[CardLine]) -> Rows {
    let mut out: Rows = vec![
        ["#", "Jugador", "Equipo"]
            .into_iter()
            .map(Cell::from)
            .collect(),
    ];
    for (idx, line) in lines.iter().enumerate() {
        out.push(vec![
            Cell::Number((idx + 1) as f64),
            Cell::from(line.player_name.as_str()),
            Cell::from(line.team_name.as_str()),
        ]);
    }
    out
}

fn mark(on: bool) -> Cell {
    Cell::from(if on { "●" } else { "" })
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let (r, c) = (row_idx as u32, col_idx as u16);
            match cell {
                Cell::Text(value) => worksheet.write_string(r, c, value),
                Cell::Number(value) => worksheet.write_number(r, c, *value),
            }
            .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
