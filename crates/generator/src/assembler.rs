//! Lineup assembly with bounded retry.
//!
//! Each slot in a batch is an independent sampling trial: reshuffle, take the
//! prefix the mix plan asks for, validate, and retry until the tuple passes or
//! the attempt budget runs out. Slots that never pass are skipped.

use prop_lineup_core::{Lean, PropCandidate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::{GeneratorConfig, SlotPlan};
use crate::lineup::Lineup;
use crate::shuffle::Partition;

/// Minimum distinct teams in an accepted lineup.
pub const MIN_DISTINCT_TEAMS: usize = 2;

/// Why a drawn tuple was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Supply ran out before the lineup was full.
    ShortTuple,
    /// A leg has no player or no team.
    MissingIdentity,
    DuplicatePlayer,
    /// Fewer than [`MIN_DISTINCT_TEAMS`] teams.
    SingleTeam,
    /// Same player set as a lineup already in the batch.
    RepeatLineup,
}

/// Aggregate counters for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Candidates with an over or under lean after filtering.
    pub eligible: usize,
    pub overs: usize,
    pub unders: usize,
    pub requested: usize,
    pub filled: usize,
    pub skipped: usize,
    /// Attempts across all slots, accepted ones included.
    pub attempts: usize,
}

/// Checks the per-lineup invariants on a drawn tuple.
///
/// # Errors
/// Returns the first [`Rejection`] that applies.
pub fn check_tuple(tuple: &[&PropCandidate], lineup_size: usize) -> Result<(), Rejection> {
    if tuple.len() != lineup_size {
        return Err(Rejection::ShortTuple);
    }

    let mut players = HashSet::with_capacity(tuple.len());
    let mut teams = HashSet::new();
    for candidate in tuple {
        let (Some(player), Some(team)) = (candidate.player(), candidate.team()) else {
            return Err(Rejection::MissingIdentity);
        };
        if !players.insert(player) {
            return Err(Rejection::DuplicatePlayer);
        }
        teams.insert(team);
    }

    if teams.len() < MIN_DISTINCT_TEAMS {
        return Err(Rejection::SingleTeam);
    }
    Ok(())
}

fn player_key(tuple: &[&PropCandidate]) -> Vec<String> {
    let mut key: Vec<String> = tuple
        .iter()
        .filter_map(|c| c.player().map(str::to_string))
        .collect();
    key.sort_unstable();
    key
}

pub struct LineupAssembler<'p, 'a> {
    partition: &'p Partition<'a>,
    lineup_size: usize,
    plan: SlotPlan,
    max_attempts: usize,
    distinct_lineups: bool,
}

impl<'p, 'a> LineupAssembler<'p, 'a> {
    /// Builds an assembler for an already validated config.
    #[must_use]
    pub fn new(partition: &'p Partition<'a>, config: &GeneratorConfig) -> Self {
        Self {
            partition,
            lineup_size: config.lineup_size,
            plan: config.preference.plan(config.lineup_size),
            max_attempts: config.max_attempts_per_slot,
            distinct_lineups: config.distinct_lineups,
        }
    }

    /// Draws one candidate tuple from fresh shuffles.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'a PropCandidate> {
        match self.plan {
            SlotPlan::Whole => {
                let mut all = self.partition.shuffled_eligible(rng);
                all.truncate(self.lineup_size);
                all
            }
            SlotPlan::Split {
                first,
                first_count,
                second_count,
                top_up,
            } => {
                let second = match first {
                    Lean::Over => Lean::Under,
                    _ => Lean::Over,
                };
                let favored = self.partition.shuffled_side(first, rng);
                let other = self.partition.shuffled_side(second, rng);

                let mut tuple: Vec<&'a PropCandidate> = favored
                    .iter()
                    .take(first_count)
                    .chain(other.iter().take(second_count))
                    .copied()
                    .collect();
                if top_up && tuple.len() < self.lineup_size {
                    let missing = self.lineup_size - tuple.len();
                    tuple.extend(favored.iter().skip(first_count).take(missing).copied());
                }
                tuple
            }
        }
    }

    /// Runs the retry loop for one slot. Returns the accepted tuple, if any,
    /// and the number of attempts spent.
    pub fn fill_slot<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        accepted: &HashSet<Vec<String>>,
    ) -> (Option<Vec<&'a PropCandidate>>, usize) {
        let mut attempts = 0;
        while attempts < self.max_attempts {
            attempts += 1;
            let tuple = self.draw(rng);
            let verdict = check_tuple(&tuple, self.lineup_size).and_then(|()| {
                if self.distinct_lineups && accepted.contains(&player_key(&tuple)) {
                    Err(Rejection::RepeatLineup)
                } else {
                    Ok(())
                }
            });
            match verdict {
                Ok(()) => return (Some(tuple), attempts),
                Err(reason) => trace!(attempt = attempts, ?reason, "Tuple rejected"),
            }
        }
        (None, attempts)
    }

    /// Fills up to `max_lineups` slots.
    pub fn assemble<R: Rng + ?Sized>(&self, max_lineups: usize, rng: &mut R) -> (Vec<Lineup>, BatchStats) {
        let mut stats = BatchStats {
            eligible: self.partition.eligible().len(),
            overs: self.partition.overs().len(),
            unders: self.partition.unders().len(),
            requested: max_lineups,
            ..BatchStats::default()
        };
        // No draw can reach full length, so every slot would exhaust its budget.
        if stats.eligible < self.lineup_size {
            debug!(
                eligible = stats.eligible,
                lineup_size = self.lineup_size,
                "Pool smaller than one lineup, skipping all slots"
            );
            stats.skipped = max_lineups;
            return (Vec::new(), stats);
        }

        let mut lineups = Vec::new();
        let mut accepted: HashSet<Vec<String>> = HashSet::new();

        for slot in 0..max_lineups {
            let (tuple, attempts) = self.fill_slot(rng, &accepted);
            stats.attempts += attempts;
            match tuple {
                Some(tuple) => {
                    if self.distinct_lineups {
                        accepted.insert(player_key(&tuple));
                    }
                    lineups.push(Lineup::new(tuple.into_iter().cloned().collect()));
                    stats.filled += 1;
                }
                None => {
                    debug!(slot, attempts, "Lineup slot skipped after exhausting attempts");
                    stats.skipped += 1;
                }
            }
        }

        (lineups, stats)
    }
}
