//! Summary command: shows what a filter leaves in the pool.

use anyhow::Result;
use clap::Args;
use prop_lineup_generator::PoolSummary;
use std::path::PathBuf;

use super::common::{load_pool, write_json, FilterArgs};

/// Arguments for the summary command.
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Props pool JSON file
    #[arg(short, long)]
    pub pool: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Runs the summary command.
///
/// # Errors
/// Returns an error if the pool cannot be read.
pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let pool = load_pool(&args.pool)?;
    let summary = PoolSummary::from_pool(&pool, &args.filter.to_filter());

    if summary.single_team() {
        tracing::warn!("Filtered pool spans fewer than two teams; no lineup can be built");
    }

    write_json(&summary, None, args.pretty)
}
