//! # tablebook CLI
//!
//! Command-line host for the tablebook router. It stands in for the browser:
//! it loads the route configuration, builds the navigator and drives it.
//!
//! ## Usage
//!
//! - `tablebook` - Start an interactive navigation session
//! - `tablebook routes` - List the route table
//! - `tablebook resolve /reservation` - Resolve a path without navigating
//! - `tablebook navigate / /reservation back` - Replay navigation steps

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablebook_core::HistoryMode;

mod commands;
mod config;
mod output;
mod steps;

use commands::{interactive_command, navigate_command, resolve_command, routes_command};
use config::CliConfigLoader;

/// tablebook - route table and navigator for the reservation app
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Route table and history-backed navigator for the reservation app")]
#[command(long_about = None)]
struct Cli {
    /// Route configuration file or directory path
    #[arg(short, long, env = "TABLEBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// History strategy override (web, hash, memory)
    #[arg(long)]
    history: Option<HistoryMode>,

    /// Base path override
    #[arg(long)]
    base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match order
    Routes,

    /// Resolve a path against the route table
    Resolve {
        /// Path to resolve, e.g. /reservation?party=2
        path: String,
    },

    /// Apply navigation steps in order: paths, route names, back, forward,
    /// go:<n>, replace:<target>, link:<href>
    Navigate {
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(history) = cli.history {
        loader = loader.with_history_override(history);
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flag
    let filter = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes) => routes_command(config_loader).await,
        Some(Commands::Resolve { path }) => resolve_command(config_loader, path).await,
        Some(Commands::Navigate { steps }) => navigate_command(config_loader, steps).await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
