//! Emergency Dispatch - Entry Point
//!
//! Interactive console game: five rounds of incidents, each answered by
//! the fastest capable unit still available.

use emergency_dispatch::core::config::SimulationConfig;
use emergency_dispatch::core::error::Result;
use emergency_dispatch::input::LineReader;
use emergency_dispatch::simulation::{RoundController, SimulationState};

use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the narrative
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("emergency_dispatch=error")),
        )
        .with_writer(io::stderr)
        .init();

    let config = SimulationConfig::default();
    let mut state = SimulationState::new(&config);

    println!("=== EMERGENCY DISPATCH ===");
    println!(
        "{} units on call. Send the fastest capable unit to each incident.",
        state.pool.len()
    );

    let input = LineReader::new(io::stdin().lock());
    let mut controller = RoundController::new(config, input, io::stdout().lock());
    controller.run(&mut state)?;

    Ok(())
}
