use prop_lineup_core::{Lean, PropCandidate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::PoolFilter;
use crate::filter::filter_pool;

/// Overview of what a filter leaves to draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub total: usize,
    /// Passed structural checks and caller filters.
    pub filtered: usize,
    pub overs: usize,
    pub unders: usize,
    /// Filtered candidates whose tag never enters a lineup.
    pub excluded: usize,
    pub by_tag: BTreeMap<String, usize>,
    pub teams: usize,
    /// Distinct game keys, sorted.
    pub games: Vec<String>,
}

impl PoolSummary {
    #[must_use]
    pub fn from_pool(pool: &[PropCandidate], filter: &PoolFilter) -> Self {
        let filtered = filter_pool(pool, filter);
        let mut summary = Self {
            total: pool.len(),
            filtered: filtered.len(),
            ..Self::default()
        };

        let mut games = BTreeSet::new();
        let mut teams = BTreeSet::new();
        for candidate in &filtered {
            match candidate.lean() {
                Lean::Over => summary.overs += 1,
                Lean::Under => summary.unders += 1,
                Lean::Excluded => summary.excluded += 1,
            }
            *summary.by_tag.entry(candidate.tag.to_string()).or_default() += 1;
            if let Some(team) = candidate.team() {
                teams.insert(team);
            }
            if let Some(game) = candidate.game_key(filter.multi_sport) {
                games.insert(game);
            }
        }

        summary.teams = teams.len();
        summary.games = games.into_iter().collect();
        summary
    }

    /// True when no lineup of any size can satisfy the team-diversity floor.
    #[must_use]
    pub fn single_team(&self) -> bool {
        self.teams < 2
    }
}
