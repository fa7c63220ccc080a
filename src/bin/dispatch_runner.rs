//! Headless Dispatch Runner
//!
//! Plays a full simulation with randomly generated incidents and prints
//! the summary as JSON or text.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use emergency_dispatch::core::config::SimulationConfig;
use emergency_dispatch::core::error::Result;
use emergency_dispatch::input::AutoResponder;
use emergency_dispatch::simulation::{RoundController, SimulationState};
use tracing_subscriber::EnvFilter;

/// Headless Dispatch Runner - random incidents, no prompts
#[derive(Parser, Debug)]
#[command(name = "dispatch_runner")]
#[command(about = "Run a dispatch simulation with random incidents and report the score")]
struct Args {
    /// Roster/config TOML file (defaults to the built-in roster)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Echo the round narrative to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("emergency_dispatch=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
        config.validate()?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Running {} rounds with seed {}", config.rounds, seed);

    let narrative: Box<dyn Write> = if args.verbose {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    };

    let mut state = SimulationState::new(&config);
    let mut controller = RoundController::new(config, AutoResponder::with_seed(seed), narrative);
    let summary = controller.run(&mut state)?;

    match args.format.as_str() {
        "text" => {
            println!("Dispatch Result");
            println!("===============");
            println!("{}", summary);
            println!("Seed: {}", seed);
        }
        "json" => println!("{}", summary.to_json()?),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", summary.to_json()?);
        }
    }

    Ok(())
}
