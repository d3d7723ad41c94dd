//! Over/under partitioning and per-attempt shuffling.

use prop_lineup_core::{Lean, PropCandidate};
use rand::Rng;

/// In-place Fisher-Yates shuffle: walks from the last index down, swapping
/// each slot with a uniformly drawn index at or below it.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy, leaving `items` untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, rng);
    copy
}

/// Filtered pool split by lean. Excluded-lean candidates are dropped.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    overs: Vec<&'a PropCandidate>,
    unders: Vec<&'a PropCandidate>,
    eligible: Vec<&'a PropCandidate>,
}

impl<'a> Partition<'a> {
    #[must_use]
    pub fn split(pool: &[&'a PropCandidate]) -> Self {
        let mut partition = Self::default();
        for &candidate in pool {
            match candidate.lean() {
                Lean::Over => partition.overs.push(candidate),
                Lean::Under => partition.unders.push(candidate),
                Lean::Excluded => continue,
            }
            partition.eligible.push(candidate);
        }
        partition
    }

    #[must_use]
    pub fn overs(&self) -> &[&'a PropCandidate] {
        &self.overs
    }

    #[must_use]
    pub fn unders(&self) -> &[&'a PropCandidate] {
        &self.unders
    }

    /// Overs and unders in pool order.
    #[must_use]
    pub fn eligible(&self) -> &[&'a PropCandidate] {
        &self.eligible
    }

    #[must_use]
    pub fn side(&self, lean: Lean) -> &[&'a PropCandidate] {
        match lean {
            Lean::Over => &self.overs,
            Lean::Under => &self.unders,
            Lean::Excluded => &[],
        }
    }

    /// Fresh permutation of one side.
    pub fn shuffled_side<R: Rng + ?Sized>(&self, lean: Lean, rng: &mut R) -> Vec<&'a PropCandidate> {
        shuffled(self.side(lean), rng)
    }

    /// Fresh permutation of the whole eligible pool.
    pub fn shuffled_eligible<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'a PropCandidate> {
        shuffled(&self.eligible, rng)
    }
}
