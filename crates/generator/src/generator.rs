use prop_lineup_core::PropCandidate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembler::{BatchStats, LineupAssembler};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::filter::filter_pool;
use crate::lineup::Lineup;
use crate::shuffle::Partition;

/// Output of one generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupBatch {
    pub lineups: Vec<Lineup>,
    pub stats: BatchStats,
}

/// Generates a batch with the caller's random source.
///
/// Pure apart from `rng`: the pool is read-only and nothing outlives the call.
///
/// # Errors
/// Returns a [`ConfigError`] if the config is structurally invalid. An
/// undersized or single-team pool is not an error; the batch is just shorter.
pub fn generate_batch<R: Rng + ?Sized>(
    pool: &[PropCandidate],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<LineupBatch, ConfigError> {
    config.validate()?;

    let filtered = filter_pool(pool, &config.filter);
    let partition = Partition::split(&filtered);

    info!(
        mix = %config.preference,
        lineup_size = config.lineup_size,
        max_lineups = config.max_lineups,
        "Pool sizes: {} eligible of {} ({} over, {} under)",
        partition.eligible().len(),
        pool.len(),
        partition.overs().len(),
        partition.unders().len()
    );

    let assembler = LineupAssembler::new(&partition, config);
    let (lineups, stats) = assembler.assemble(config.max_lineups, rng);

    info!(
        "{} of {} lineups generated from {} attempts",
        stats.filled, stats.requested, stats.attempts
    );

    Ok(LineupBatch { lineups, stats })
}

/// Generates lineups with the caller's random source.
///
/// # Errors
/// Returns a [`ConfigError`] if the config is structurally invalid.
pub fn generate<R: Rng + ?Sized>(
    pool: &[PropCandidate],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<Lineup>, ConfigError> {
    generate_batch(pool, config, rng).map(|batch| batch.lineups)
}

/// Validated config plus its own seeded or entropy-backed random source.
pub struct LineupGenerator {
    config: GeneratorConfig,
}

impl LineupGenerator {
    /// # Errors
    /// Returns a [`ConfigError`] if the config is structurally invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Runs one generation over `pool`. With a seed set, repeated calls return
    /// the same batch.
    ///
    /// # Errors
    /// Only fails on configuration errors, which [`LineupGenerator::new`] already rules out.
    pub fn generate(&self, pool: &[PropCandidate]) -> Result<LineupBatch, ConfigError> {
        let mut rng = self.rng();
        generate_batch(pool, &self.config, &mut rng)
    }
}
