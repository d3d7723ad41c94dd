use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default lineup request used when the caller does not override a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub lineup_size: usize,
    pub max_lineups: usize,
    /// Over/under mix, e.g. "Even", "MoreOvers", "3_OVER_3_UNDER". Empty means any mix.
    pub mix: String,
    pub max_attempts_per_slot: usize,
    pub distinct_lineups: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            lineup_size: 6,
            max_lineups: 10,
            mix: "Even".to_string(),
            max_attempts_per_slot: 100,
            distinct_lineups: false,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
