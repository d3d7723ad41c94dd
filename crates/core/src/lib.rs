pub mod candidate;
pub mod config;
pub mod config_loader;
pub mod filters;
pub mod tag;

pub use candidate::PropCandidate;
pub use config::{AppConfig, GeneratorSettings, LoggingConfig};
pub use config_loader::ConfigLoader;
pub use filters::{parse_game_hour, GameTimeWindow, HomeAway, ParseFilterError};
pub use tag::{Lean, Tag};
