use clap::{Parser, Subcommand};
use prop_lineup_core::ConfigLoader;

mod commands;

use commands::{GenerateArgs, SummaryArgs};

#[derive(Parser)]
#[command(name = "prop-lineup")]
#[command(about = "Lineup generator for player prop pools", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "config/Config.toml")]
    config: String,

    /// Config profile overlay (reads Config.<profile>.toml next to the config file)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Optional log file path (logs to file instead of stderr)
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of lineups from a props pool
    Generate(GenerateArgs),
    /// Summarize the eligible pool for a set of filters
    Summary(SummaryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = ConfigLoader::load_from(&cli.config, cli.profile.as_deref())?;

    // stdout carries JSON output, so logs go to stderr or a file.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_config.logging.level));
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    match cli.command {
        Commands::Generate(args) => {
            commands::run_generate(args, &app_config.generator).await?;
        }
        Commands::Summary(args) => {
            commands::run_summary(&args)?;
        }
    }

    Ok(())
}
