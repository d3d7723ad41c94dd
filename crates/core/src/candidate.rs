use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::tag::{Lean, Tag};

/// One player-stat proposition as delivered by the props feed.
///
/// Field names follow the upstream record keys. Every field is optional on the
/// wire; eligibility rules decide what a usable candidate needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropCandidate {
    #[serde(rename = "Player", default, deserialize_with = "trimmed_string")]
    pub player: Option<String>,

    #[serde(rename = "Team", default, deserialize_with = "trimmed_string")]
    pub team: Option<String>,

    #[serde(rename = "Opponent", default, deserialize_with = "trimmed_string")]
    pub opponent: Option<String>,

    #[serde(rename = "Matchup", default, deserialize_with = "trimmed_string")]
    pub matchup: Option<String>,

    #[serde(rename = "Prop Type", default, deserialize_with = "trimmed_string")]
    pub prop_type: Option<String>,

    #[serde(rename = "Prop Value", default, deserialize_with = "lenient_decimal")]
    pub prop_value: Option<Decimal>,

    #[serde(rename = "Tag", default)]
    pub tag: Tag,

    #[serde(rename = "Confidence", default, deserialize_with = "lenient_f64")]
    pub confidence: Option<f64>,

    #[serde(rename = "GameTime", default, deserialize_with = "trimmed_string")]
    pub game_time: Option<String>,

    #[serde(rename = "Home/Away", default, deserialize_with = "trimmed_string")]
    pub home_away: Option<String>,

    #[serde(rename = "Sport", default, deserialize_with = "trimmed_string")]
    pub sport: Option<String>,
}

impl PropCandidate {
    /// Creates a candidate with the identity fields set.
    #[must_use]
    pub fn new(player: &str, team: &str, opponent: &str, tag: Tag) -> Self {
        Self {
            player: Some(player.to_string()),
            team: Some(team.to_string()),
            opponent: Some(opponent.to_string()),
            tag,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sport(mut self, sport: &str) -> Self {
        self.sport = Some(sport.to_string());
        self
    }

    #[must_use]
    pub fn with_matchup(mut self, matchup: &str) -> Self {
        self.matchup = Some(matchup.to_string());
        self
    }

    #[must_use]
    pub fn with_game_time(mut self, game_time: &str) -> Self {
        self.game_time = Some(game_time.to_string());
        self
    }

    #[must_use]
    pub fn with_home_away(mut self, home_away: &str) -> Self {
        self.home_away = Some(home_away.to_string());
        self
    }

    #[must_use]
    pub fn with_prop(mut self, prop_type: &str, prop_value: Decimal) -> Self {
        self.prop_type = Some(prop_type.to_string());
        self.prop_value = Some(prop_value);
        self
    }

    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    #[must_use]
    pub fn lean(&self) -> Lean {
        self.tag.lean()
    }

    /// Canonical game key: both team codes sorted and joined with " vs ",
    /// qualified by sport when `qualify_sport` is set and the sport is known.
    ///
    /// Returns `None` when the opponent is unknown.
    #[must_use]
    pub fn game_key(&self, qualify_sport: bool) -> Option<String> {
        let team = self.team.as_deref()?;
        let opponent = self.opponent.as_deref()?;
        let mut sides = [team, opponent];
        sides.sort_unstable();
        let pairing = format!("{} vs {}", sides[0], sides[1]);
        match (qualify_sport, self.sport.as_deref()) {
            (true, Some(sport)) => Some(format!("{pairing} ({sport})")),
            _ => Some(pairing),
        }
    }

    /// Key used for game filtering and malformed-row detection: the upstream
    /// matchup label when present, otherwise the derived game key.
    #[must_use]
    pub fn matchup_key(&self, qualify_sport: bool) -> Option<String> {
        self.matchup
            .clone()
            .or_else(|| self.game_key(qualify_sport))
    }
}

fn trimmed_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Other(serde::de::IgnoredAny),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Text(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Some(Raw::Number(n)) if n.is_finite() => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Decimal::try_from(n).ok(),
        Some(RawNumber::Text(text)) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}
