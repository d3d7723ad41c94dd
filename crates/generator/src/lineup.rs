use prop_lineup_core::{Lean, PropCandidate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One accepted betting slip. Serializes as a plain array of candidate records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    legs: Vec<PropCandidate>,
}

impl Lineup {
    #[must_use]
    pub fn new(legs: Vec<PropCandidate>) -> Self {
        Self { legs }
    }

    #[must_use]
    pub fn legs(&self) -> &[PropCandidate] {
        &self.legs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    #[must_use]
    pub fn players(&self) -> BTreeSet<&str> {
        self.legs.iter().filter_map(PropCandidate::player).collect()
    }

    #[must_use]
    pub fn teams(&self) -> BTreeSet<&str> {
        self.legs.iter().filter_map(PropCandidate::team).collect()
    }

    #[must_use]
    pub fn count(&self, lean: Lean) -> usize {
        self.legs.iter().filter(|c| c.lean() == lean).count()
    }

    #[must_use]
    pub fn into_legs(self) -> Vec<PropCandidate> {
        self.legs
    }
}
