use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use log::info;
use serde::{Deserialize, Serialize};

use crate::league::LeagueSnapshot;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    #[serde(default)]
    saved_at: Option<u64>,
    league: LeagueSnapshot,
}

/// Missing file means a fresh league; a file that exists but cannot be read
/// is an error.
pub fn load_or_default(path: &Path) -> Result<LeagueSnapshot> {
    if !path.exists() {
        info!("no snapshot at {}, starting empty", path.display());
        return Ok(LeagueSnapshot::default());
    }
    load(path)
}

pub fn load(path: &Path) -> Result<LeagueSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    parse_snapshot_json(&raw).with_context(|| format!("parse snapshot {}", path.display()))
}

pub fn parse_snapshot_json(raw: &str) -> Result<LeagueSnapshot> {
    let file: SnapshotFile = serde_json::from_str(raw.trim()).context("invalid snapshot json")?;
    if file.version != SNAPSHOT_VERSION {
        return Err(anyhow!(
            "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
            file.version
        ));
    }
    Ok(file.league)
}

pub fn save(path: &Path, league: &LeagueSnapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create snapshot dir {}", parent.display()))?;
    }
    let file = SnapshotFile {
        version: SNAPSHOT_VERSION,
        saved_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .map(|d| d.as_secs()),
        league: league.clone(),
    };
    let json = serde_json::to_string_pretty(&file).context("serialize snapshot")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write snapshot")?;
    fs::rename(&tmp, path).context("swap snapshot")?;
    info!(
        "saved snapshot {} ({} teams, {} players, {} matches)",
        path.display(),
        league.teams.len(),
        league.players.len(),
        league.matches.len()
    );
    Ok(())
}
