//! Headless driver for the dragon keeper simulation.
//!
//! Every subcommand opens the save in `DRAGONKEEP_SAVE_DIR`, runs against it
//! and exits. Incubator timers only live for the duration of one command.
//!
//! ```bash
//! dragonkeep seed
//! dragonkeep simulate --ticks 50
//! dragonkeep hatch --elixir 0 --nurture 1
//! dragonkeep fight --boss Gloomfang
//! ```

mod commands;
mod config;
mod logging;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Fight, Hatch, Roster, Seed, Simulate};
use config::CliConfig;
use game_core::GameError;
use runtime::RuntimeError;

/// Breed, hatch and battle dragons
#[derive(Parser)]
#[command(name = "dragonkeep")]
#[command(about = "Breed, hatch and battle dragons", long_about = None)]
#[command(version)]
struct Cli {
    /// Save directory (overrides DRAGONKEEP_SAVE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Random seed (overrides DRAGONKEEP_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a new save from the roster and starting inventory
    Seed(Seed),

    /// Run the arena with random collisions
    Simulate(Simulate),

    /// Incubate an egg until it hatches
    Hatch(Hatch),

    /// Fight a boss with the whole collection
    Fight(Fight),

    /// Show the save contents
    Roster(Roster),

    /// Heal the collection
    Rest,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.save_dir {
        config.save_dir = dir;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let _guard = logging::setup_logging(&config.log_dir)?;
    tracing::info!("Save dir: {}", config.save_dir.display());

    let result = match cli.command {
        Command::Seed(cmd) => cmd.execute(&config),
        Command::Simulate(cmd) => cmd.execute(&config),
        Command::Hatch(cmd) => cmd.execute(&config),
        Command::Fight(cmd) => cmd.execute(&config).await,
        Command::Roster(cmd) => cmd.execute(&config),
        Command::Rest => commands::rest::execute(&config),
    };

    if let Err(error) = &result
        && let Some(runtime_error) = error.downcast_ref::<RuntimeError>()
    {
        tracing::error!(
            code = runtime_error.error_code(),
            severity = runtime_error.severity().as_str(),
            "{}",
            runtime_error
        );
    }
    result
}
