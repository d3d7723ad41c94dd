//! CLI commands for the prop lineup generator.

pub mod common;
pub mod generate;
pub mod summary;

pub use generate::{run_generate, GenerateArgs};
pub use summary::{run_summary, SummaryArgs};
