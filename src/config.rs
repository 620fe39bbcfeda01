use std::env;
use std::path::PathBuf;

use crate::league::DEFAULT_LEAGUE_NAME;

pub const DEFAULT_CATEGORY: &str = "senior";
pub const DEFAULT_TOP_SCORERS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    /// Used when a snapshot is created from scratch.
    pub league_name: String,
    pub data_dir: PathBuf,
    pub category: String,
    pub top_scorers: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            league_name: DEFAULT_LEAGUE_NAME.to_string(),
            data_dir: PathBuf::from("data"),
            category: DEFAULT_CATEGORY.to_string(),
            top_scorers: DEFAULT_TOP_SCORERS,
        }
    }
}

impl LeagueConfig {
    /// Reads `LEAGUE_*` / `REPORT_*` variables. Callers load `.env` files
    /// first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            league_name: non_empty("LEAGUE_NAME").unwrap_or(defaults.league_name),
            data_dir: non_empty("LEAGUE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            category: non_empty("LEAGUE_CATEGORY")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.category),
            top_scorers: non_empty("REPORT_TOP_SCORERS")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.top_scorers)
                .clamp(1, 100),
        }
    }

    /// Each category keeps its own league file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.category))
    }
}
