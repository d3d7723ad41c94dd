//! Generate command: builds a lineup batch from a pool file.

use anyhow::{anyhow, Result};
use clap::Args;
use prop_lineup_core::GeneratorSettings;
use prop_lineup_generator::{GeneratorConfig, LineupGenerator};
use std::path::PathBuf;
use std::time::Duration;

use super::common::{load_pool, write_json, FilterArgs};

/// Arguments for the generate command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Props pool JSON file
    #[arg(short, long)]
    pub pool: PathBuf,

    /// Props per lineup (overrides config)
    #[arg(long)]
    pub lineup_size: Option<usize>,

    /// Lineups to attempt (overrides config)
    #[arg(long)]
    pub max_lineups: Option<usize>,

    /// Over/under mix: Even, MoreOvers, MoreUnders, Any, or a preset like 4_OVER_2_UNDER
    #[arg(long)]
    pub mix: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Seed for a reproducible batch
    #[arg(long, env = "PROP_LINEUP_SEED")]
    pub seed: Option<u64>,

    /// Never return the same player set twice in one batch
    #[arg(long)]
    pub distinct: bool,

    /// Give up if generation takes longer than this
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

impl GenerateArgs {
    /// Layers command-line overrides on top of configured defaults.
    ///
    /// # Errors
    /// Returns an error if the merged configuration is invalid.
    pub fn build_config(&self, defaults: &GeneratorSettings) -> Result<GeneratorConfig> {
        let mut settings = defaults.clone();
        if let Some(size) = self.lineup_size {
            settings.lineup_size = size;
        }
        if let Some(max) = self.max_lineups {
            settings.max_lineups = max;
        }
        if let Some(mix) = &self.mix {
            settings.mix.clone_from(mix);
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.distinct_lineups |= self.distinct;

        let config = GeneratorConfig::try_from(&settings)?.with_filter(self.filter.to_filter());
        Ok(config)
    }
}

/// Runs the generate command.
///
/// # Errors
/// Returns an error if the configuration is invalid, the pool cannot be read,
/// or generation exceeds the timeout.
pub async fn run_generate(args: GenerateArgs, defaults: &GeneratorSettings) -> Result<()> {
    let config = args.build_config(defaults)?;
    let pool = load_pool(&args.pool)?;
    let generator = LineupGenerator::new(config)?;

    // The engine has no cancellation point; a late result is simply dropped.
    let handle = tokio::task::spawn_blocking(move || generator.generate(&pool));
    let batch = tokio::time::timeout(Duration::from_millis(args.timeout_ms), handle)
        .await
        .map_err(|_| anyhow!("Lineup generation exceeded {} ms", args.timeout_ms))???;

    if batch.stats.filled < batch.stats.requested {
        tracing::warn!(
            "Only {} of {} lineups could be built ({} eligible props: {} over, {} under)",
            batch.stats.filled,
            batch.stats.requested,
            batch.stats.eligible,
            batch.stats.overs,
            batch.stats.unders
        );
    }

    write_json(&batch.lineups, args.output.as_ref(), args.pretty)
}
