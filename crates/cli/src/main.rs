//! Soapbox CLI — the main entry point.
//!
//! Commands:
//! - `extract`   — Extract exactly 4 checkable claims per statement
//! - `factcheck` — Search published fact checks for a claim
//! - `doctor`    — Diagnose config and gateway health
//!
//! Exit codes: 0 success, 2 missing/unreadable input, 3 zero statements
//! parsed, 1 any other failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

use commands::extract::ExtractArgs;

#[derive(Parser)]
#[command(
    name = "soapbox",
    about = "Soapbox — extract checkable claims from persona statements via a local model",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a config file (default: ~/.soapbox/config.toml)
    #[arg(long, global = true, env = "SOAPBOX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract exactly 4 checkable claims per statement
    Extract(ExtractArgs),

    /// Search published fact checks for a claim text
    Factcheck {
        /// The claim text to search for
        query: String,

        /// Maximum results to print (at least 1)
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },

    /// Diagnose config and gateway health
    Doctor,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let outcome = match cli.command {
        Commands::Extract(args) => commands::extract::run(args, cli.config.as_deref()).await,
        Commands::Factcheck { query, limit } => {
            commands::factcheck::run(&query, limit, cli.config.as_deref()).await
        }
        Commands::Doctor => commands::doctor::run(cli.config.as_deref()).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
