//! Prop tags and their over/under lean.
//!
//! Upstream analysis labels every prop with a tag string. The lineup engine only
//! cares about which side of the line a tag leans toward, so the mapping lives
//! in one table here instead of being spread across string comparisons.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which side of the line a prop leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lean {
    Over,
    Under,
    /// Neutral or unusable tags. Never drawn into a lineup.
    Excluded,
}

/// Classification attached to a prop by the upstream model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    MegaSmash,
    Smash,
    FadeUnder,
    Fade,
    MegaFade,
    Good,
    Lean,
    Unsupported,
    Insufficient,
    MissingData,
    NoProp,
    /// Any label not in the table, kept verbatim.
    Other(String),
}

/// Label, tag and lean for every known tag.
const TAG_TABLE: &[(&str, Tag, Lean)] = &[
    ("MEGA SMASH", Tag::MegaSmash, Lean::Over),
    ("SMASH", Tag::Smash, Lean::Over),
    ("FADE/UNDER", Tag::FadeUnder, Lean::Under),
    ("FADE", Tag::Fade, Lean::Under),
    ("MEGA FADE", Tag::MegaFade, Lean::Under),
    ("GOOD", Tag::Good, Lean::Excluded),
    ("LEAN", Tag::Lean, Lean::Excluded),
    ("UNSUPPORTED", Tag::Unsupported, Lean::Excluded),
    ("INSUFFICIENT", Tag::Insufficient, Lean::Excluded),
    ("MISSINGDATA", Tag::MissingData, Lean::Excluded),
    ("NO_PROP", Tag::NoProp, Lean::Excluded),
];

impl Tag {
    /// Parses an upstream label. Matching ignores case and surrounding
    /// whitespace; unknown labels become [`Tag::Other`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_uppercase();
        TAG_TABLE
            .iter()
            .find(|(text, _, _)| *text == normalized)
            .map_or_else(|| Self::Other(label.trim().to_string()), |(_, tag, _)| tag.clone())
    }

    /// Canonical upstream label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Other(label) => label.as_str(),
            known => TAG_TABLE
                .iter()
                .find(|(_, tag, _)| tag == known)
                .map_or("", |(text, _, _)| *text),
        }
    }

    #[must_use]
    pub fn lean(&self) -> Lean {
        TAG_TABLE
            .iter()
            .find(|(_, tag, _)| tag == self)
            .map_or(Lean::Excluded, |(_, _, lean)| *lean)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.lean() == Lean::Over
    }

    #[must_use]
    pub fn is_under(&self) -> bool {
        self.lean() == Lean::Under
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.map_or_else(Self::default, |l| Self::parse(&l)))
    }
}
