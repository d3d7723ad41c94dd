//! Candidate pool filter.
//!
//! Narrows a raw props snapshot to the candidates one generation request may
//! draw from. Structural checks always run; caller filters run on top.

use prop_lineup_core::PropCandidate;

use crate::config::PoolFilter;

/// Marker upstream writes into the matchup of rows with a missing opponent.
const MISSING_MARKER: &str = "nan";

/// Returns true if the candidate carries the identity fields a lineup needs
/// and a usable matchup.
#[must_use]
pub fn is_well_formed(candidate: &PropCandidate, multi_sport: bool) -> bool {
    if candidate.player().is_none() || candidate.team().is_none() {
        return false;
    }
    candidate
        .matchup_key(multi_sport)
        .is_some_and(|key| !key.to_lowercase().contains(MISSING_MARKER))
}

impl PoolFilter {
    /// Applies the caller's predicates. Does not check structure; see [`is_well_formed`].
    #[must_use]
    pub fn accepts(&self, candidate: &PropCandidate) -> bool {
        if let Some(sport) = &self.sport {
            let same_sport = candidate
                .sport
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(sport.trim()));
            if !same_sport {
                return false;
            }
        }

        if let Some(window) = self.time_window {
            if !candidate.game_time.as_deref().is_some_and(|t| window.contains(t)) {
                return false;
            }
        }

        if let Some(side) = self.home_away {
            if !candidate.home_away.as_deref().is_some_and(|v| side.matches(v)) {
                return false;
            }
        }

        if let Some(game) = &self.game {
            let needle = game.trim().to_lowercase();
            let in_game = candidate
                .matchup_key(self.multi_sport)
                .is_some_and(|key| key.to_lowercase().contains(&needle));
            if !in_game {
                return false;
            }
        }

        self.tags.is_empty() || self.tags.contains(&candidate.tag)
    }
}

/// Filters `pool`, preserving input order.
#[must_use]
pub fn filter_pool<'a>(pool: &'a [PropCandidate], filter: &PoolFilter) -> Vec<&'a PropCandidate> {
    pool.iter()
        .filter(|c| is_well_formed(c, filter.multi_sport) && filter.accepts(c))
        .collect()
}
