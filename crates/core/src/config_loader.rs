use crate::config::AppConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by merging defaults, TOML, environment variables, and JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml", None)
    }

    /// Loads application configuration with a specific profile.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_with_profile(profile: &str) -> Result<AppConfig> {
        Self::load_from("config/Config.toml", Some(profile))
    }

    /// Loads configuration rooted at an explicit TOML path. A profile overlay is
    /// read from `Config.<profile>.toml` next to it, and JSON from `Config.json`.
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or a value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>, profile: Option<&str>) -> Result<AppConfig> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path));
        if let Some(profile) = profile {
            figment = figment.merge(Toml::file(dir.join(format!("Config.{profile}.toml"))));
        }

        let config: AppConfig = figment
            .merge(Env::prefixed("APP_").split("__"))
            .merge(Json::file(dir.join("Config.json")))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}
