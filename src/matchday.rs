use crate::model::Match;
use crate::scorers::{ScorerEntry, tally_goals};

/// Highest matchday present, or 0 when no match is grouped.
pub fn latest_matchday(matches: &[Match]) -> u32 {
    matches.iter().map(Match::matchday).max().unwrap_or(0)
}

pub fn matches_for_matchday(matches: &[Match], matchday: u32) -> Vec<&Match> {
    matches.iter().filter(|m| m.matchday() == matchday).collect()
}

/// Goal ranking restricted to one round. Uses the same name/team matching
/// as the season ranking but carries no jersey numbers.
pub fn compute_matchday_scorers(matches: &[Match], matchday: u32) -> Vec<ScorerEntry> {
    tally_goals(matches.iter().filter(|m| m.matchday() == matchday), None)
}
