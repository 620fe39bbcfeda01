pub mod config;
pub mod fake_league;
pub mod league;
pub mod matchday;
pub mod model;
pub mod report;
pub mod report_export;
pub mod sanctions;
pub mod scorers;
pub mod snapshot;
pub mod standings;
pub mod validate;

pub use league::{LeagueSnapshot, LeagueSource};
pub use matchday::compute_matchday_scorers;
pub use sanctions::compute_sanctioned_players;
pub use scorers::compute_scorers;
pub use standings::compute_standings;
