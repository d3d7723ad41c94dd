//! Filter vocabularies shared by the pool filter and the CLI.

use chrono::{DateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing a filter value from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown game time window '{0}' (expected Early, Afternoon, Evening or Late)")]
    TimeWindow(String),

    #[error("unknown home/away value '{0}' (expected home or away)")]
    HomeAway(String),
}

/// Local start-time bucket for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameTimeWindow {
    /// Before 15:00.
    Early,
    /// 15:00 to 16:59.
    Afternoon,
    /// 17:00 to 19:59.
    Evening,
    /// 20:00 and later.
    Late,
}

impl GameTimeWindow {
    /// Buckets a 24-hour clock hour.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            0..=14 => Self::Early,
            15..=16 => Self::Afternoon,
            17..=19 => Self::Evening,
            _ => Self::Late,
        }
    }

    /// Returns true if the given game time string falls inside this window.
    /// Unparseable times never match.
    #[must_use]
    pub fn contains(self, game_time: &str) -> bool {
        parse_game_hour(game_time).is_some_and(|hour| Self::from_hour(hour) == self)
    }
}

impl FromStr for GameTimeWindow {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Self::Early),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "late" => Ok(Self::Late),
            _ => Err(ParseFilterError::TimeWindow(s.to_string())),
        }
    }
}

impl fmt::Display for GameTimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Early => "Early",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Late => "Late",
        };
        f.write_str(name)
    }
}

/// Extracts the local hour (0-23) from an upstream game time.
///
/// Accepts 12-hour clock strings ("7:05 PM"), 24-hour clock strings ("19:05")
/// and RFC 3339 timestamps, in which case the hour of the embedded offset is used.
#[must_use]
pub fn parse_game_hour(game_time: &str) -> Option<u32> {
    let trimmed = game_time.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Upstream sometimes appends a zone label ("7:05 PM ET"), so only the
    // leading clock tokens are parsed.
    let upper = trimmed.to_uppercase();
    let clock = upper.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    for format in ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"] {
        let parsed = NaiveTime::parse_from_str(&upper, format)
            .or_else(|_| NaiveTime::parse_from_str(&clock, format));
        if let Ok(time) = parsed {
            return Some(time.hour());
        }
    }

    DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.hour())
}

/// Home/away side of the candidate's team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }

    /// Case-insensitive exact match against an upstream value.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        value.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl FromStr for HomeAway {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            _ => Err(ParseFilterError::HomeAway(s.to_string())),
        }
    }
}

impl fmt::Display for HomeAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
