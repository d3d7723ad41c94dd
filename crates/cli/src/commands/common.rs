//! Arguments and helpers shared by commands that read a props pool.

use anyhow::{Context, Result};
use clap::Args;
use prop_lineup_core::{GameTimeWindow, HomeAway, PropCandidate, Tag};
use prop_lineup_generator::PoolFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pool filter flags.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only this sport (e.g., "nba", "mlb")
    #[arg(long)]
    pub sport: Option<String>,

    /// Case-insensitive substring of the matchup (e.g., "BOS vs LAL")
    #[arg(long)]
    pub game: Option<String>,

    /// Game start window: Early, Afternoon, Evening or Late
    #[arg(long)]
    pub time_window: Option<GameTimeWindow>,

    /// Team side: home or away
    #[arg(long)]
    pub home_away: Option<HomeAway>,

    /// Allowed tag; repeat for several (e.g., --tag SMASH --tag "FADE/UNDER")
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Qualify game keys with the sport when the pool mixes sports
    #[arg(long)]
    pub multi_sport: bool,
}

impl FilterArgs {
    #[must_use]
    pub fn to_filter(&self) -> PoolFilter {
        PoolFilter {
            sport: self.sport.clone(),
            time_window: self.time_window,
            home_away: self.home_away,
            game: self.game.clone(),
            tags: self.tags.iter().map(|t| Tag::parse(t)).collect(),
            multi_sport: self.multi_sport,
        }
    }
}

/// Accepted pool file layouts: a bare record array or `{"props": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PoolFile {
    Records(Vec<PropCandidate>),
    Wrapped { props: Vec<PropCandidate> },
}

/// Reads a props snapshot from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a supported layout.
pub fn load_pool(path: &Path) -> Result<Vec<PropCandidate>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pool file {}", path.display()))?;
    let pool = match serde_json::from_str::<PoolFile>(&raw)
        .with_context(|| format!("Failed to parse pool file {}", path.display()))?
    {
        PoolFile::Records(props) | PoolFile::Wrapped { props } => props,
    };
    tracing::info!("Loaded {} prop candidates from {}", pool.len(), path.display());
    Ok(pool)
}

/// Writes `value` as JSON to `output`, or stdout when unset.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filter_args_to_filter() {
        let args = FilterArgs {
            sport: Some("nba".to_string()),
            tags: vec!["smash".to_string(), "FADE/UNDER".to_string()],
            home_away: Some(HomeAway::Away),
            ..FilterArgs::default()
        };
        let filter = args.to_filter();

        assert_eq!(filter.sport.as_deref(), Some("nba"));
        assert_eq!(filter.home_away, Some(HomeAway::Away));
        assert_eq!(filter.tags, HashSet::from([Tag::Smash, Tag::FadeUnder]));
    }

    #[test]
    fn test_load_pool_layouts() {
        let dir = tempfile::tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        let wrapped = dir.path().join("wrapped.json");
        fs::write(&bare, r#"[{"Player": "A", "Team": "LAL", "Tag": "SMASH"}]"#).unwrap();
        fs::write(&wrapped, r#"{"props": [{"Player": "B", "Team": "BOS"}, {}]}"#).unwrap();

        assert_eq!(load_pool(&bare).unwrap().len(), 1);
        assert_eq!(load_pool(&wrapped).unwrap().len(), 2);
        assert!(load_pool(&dir.path().join("missing.json")).is_err());
    }
}
