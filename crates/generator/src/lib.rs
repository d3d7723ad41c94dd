//! Lineup generation engine for player prop pools.
//!
//! A request flows one way: raw candidates are filtered ([`filter`]), split by
//! over/under lean and shuffled ([`shuffle`]), then assembled into lineups with
//! a bounded retry per slot ([`assembler`]).

pub mod assembler;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod lineup;
pub mod shuffle;
pub mod summary;

pub use assembler::{check_tuple, BatchStats, LineupAssembler, Rejection, MIN_DISTINCT_TEAMS};
pub use config::{GeneratorConfig, MixPreference, PoolFilter, SlotPlan, DEFAULT_MAX_ATTEMPTS_PER_SLOT};
pub use error::ConfigError;
pub use filter::{filter_pool, is_well_formed};
pub use generator::{generate, generate_batch, LineupBatch, LineupGenerator};
pub use lineup::Lineup;
pub use shuffle::{fisher_yates, shuffled, Partition};
pub use summary::PoolSummary;
