//! Generation request: lineup shape, mix preference and pool filters.

use prop_lineup_core::{GameTimeWindow, GeneratorSettings, HomeAway, Lean, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Attempts allowed per lineup slot before the slot is skipped.
pub const DEFAULT_MAX_ATTEMPTS_PER_SLOT: usize = 100;

/// Share of a skewed lineup taken from the favored side, in tenths.
const SKEW_TENTHS: usize = 7;

/// Requested over/under mix for each lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MixPreference {
    /// Ignore leans and draw from the whole eligible pool.
    #[default]
    Any,
    /// Half overs (rounded down), the rest unders.
    Even,
    /// At least 70% overs (rounded up).
    MoreOvers,
    /// At least 70% unders (rounded up).
    MoreUnders,
    /// Exact counts, e.g. `4_OVER_2_UNDER`.
    Fixed { overs: usize, unders: usize },
}

/// How one attempt draws its tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPlan {
    /// Prefix of one shuffle of the whole eligible pool.
    Whole,
    /// Prefix of the `first` partition, then of the other one.
    Split {
        first: Lean,
        first_count: usize,
        second_count: usize,
        /// Fill a short minority side from the rest of the `first` partition.
        top_up: bool,
    },
}

impl MixPreference {
    /// Resolves the per-attempt draw for a lineup of `lineup_size`.
    #[must_use]
    pub fn plan(self, lineup_size: usize) -> SlotPlan {
        // ceil(0.7n) == n - floor(0.3n), computed without multiplying n.
        let minority = lineup_size / 10 * (10 - SKEW_TENTHS) + lineup_size % 10 * (10 - SKEW_TENTHS) / 10;
        let skewed = lineup_size - minority;
        match self {
            Self::Any => SlotPlan::Whole,
            Self::Even => {
                let overs = lineup_size / 2;
                SlotPlan::Split {
                    first: Lean::Over,
                    first_count: overs,
                    second_count: lineup_size - overs,
                    top_up: false,
                }
            }
            Self::MoreOvers => SlotPlan::Split {
                first: Lean::Over,
                first_count: skewed,
                second_count: lineup_size - skewed,
                top_up: true,
            },
            Self::MoreUnders => SlotPlan::Split {
                first: Lean::Under,
                first_count: skewed,
                second_count: lineup_size - skewed,
                top_up: true,
            },
            Self::Fixed { overs, unders } => SlotPlan::Split {
                first: Lean::Over,
                first_count: overs,
                second_count: unders,
                top_up: false,
            },
        }
    }
}

impl FromStr for MixPreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace(['_', '-', ' '], "");
        match normalized.as_str() {
            "" | "any" | "default" | "none" => return Ok(Self::Any),
            "even" => return Ok(Self::Even),
            "moreovers" => return Ok(Self::MoreOvers),
            "moreunders" => return Ok(Self::MoreUnders),
            _ => {}
        }
        parse_fixed_mix(trimmed).ok_or_else(|| ConfigError::UnknownPreference(s.to_string()))
    }
}

/// Parses `N_OVER_M_UNDER`, `N_OVER` and `N_UNDER`.
fn parse_fixed_mix(s: &str) -> Option<MixPreference> {
    let upper = s.to_uppercase();
    let parts: Vec<&str> = upper.split('_').collect();
    let (overs, unders) = match parts.as_slice() {
        [n, "OVER", m, "UNDER"] => (n.parse().ok()?, m.parse().ok()?),
        [n, "OVER"] => (n.parse().ok()?, 0),
        [m, "UNDER"] => (0, m.parse().ok()?),
        _ => return None,
    };
    Some(MixPreference::Fixed { overs, unders })
}

impl fmt::Display for MixPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Even => f.write_str("Even"),
            Self::MoreOvers => f.write_str("MoreOvers"),
            Self::MoreUnders => f.write_str("MoreUnders"),
            Self::Fixed { overs, unders: 0 } => write!(f, "{overs}_OVER"),
            Self::Fixed { overs: 0, unders } => write!(f, "{unders}_UNDER"),
            Self::Fixed { overs, unders } => write!(f, "{overs}_OVER_{unders}_UNDER"),
        }
    }
}

impl TryFrom<String> for MixPreference {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MixPreference> for String {
    fn from(value: MixPreference) -> Self {
        value.to_string()
    }
}

/// Caller-supplied narrowing of the candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolFilter {
    /// Keep one sport only (case-insensitive).
    pub sport: Option<String>,
    pub time_window: Option<GameTimeWindow>,
    pub home_away: Option<HomeAway>,
    /// Case-insensitive substring of the matchup key.
    pub game: Option<String>,
    /// Allowed tags; empty allows every tag.
    pub tags: HashSet<Tag>,
    /// Qualify derived game keys with the sport, for pools mixing sports.
    pub multi_sport: bool,
}

/// One immutable generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub lineup_size: usize,
    pub max_lineups: usize,
    pub preference: MixPreference,
    pub filter: PoolFilter,
    pub max_attempts_per_slot: usize,
    /// Reject a lineup whose player set was already accepted in this batch.
    pub distinct_lineups: bool,
    /// Seed for reproducible batches; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lineup_size: 6,
            max_lineups: 10,
            preference: MixPreference::Even,
            filter: PoolFilter::default(),
            max_attempts_per_slot: DEFAULT_MAX_ATTEMPTS_PER_SLOT,
            distinct_lineups: false,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(lineup_size: usize, max_lineups: usize, preference: MixPreference) -> Self {
        Self {
            lineup_size,
            max_lineups,
            preference,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: PoolFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_distinct_lineups(mut self, distinct: bool) -> Self {
        self.distinct_lineups = distinct;
        self
    }

    /// Checks the request shape. A zero `max_lineups` is valid and yields an empty batch.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lineup_size == 0 {
            return Err(ConfigError::InvalidLineupSize {
                size: self.lineup_size,
            });
        }
        if self.max_attempts_per_slot == 0 {
            return Err(ConfigError::InvalidAttemptBudget(self.max_attempts_per_slot));
        }
        if let MixPreference::Fixed { overs, unders } = self.preference {
            if overs.checked_add(unders) != Some(self.lineup_size) {
                return Err(ConfigError::MixSizeMismatch {
                    overs,
                    unders,
                    lineup_size: self.lineup_size,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<&GeneratorSettings> for GeneratorConfig {
    type Error = ConfigError;

    fn try_from(settings: &GeneratorSettings) -> Result<Self, Self::Error> {
        let config = Self {
            lineup_size: settings.lineup_size,
            max_lineups: settings.max_lineups,
            preference: settings.mix.parse()?,
            filter: PoolFilter::default(),
            max_attempts_per_slot: settings.max_attempts_per_slot,
            distinct_lineups: settings.distinct_lineups,
            seed: settings.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
