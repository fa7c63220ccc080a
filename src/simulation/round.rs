//! Round controller: incident intake, dispatch and narration
//!
//! Each round moves through
//! `AwaitingIncident -> Selecting -> {Dispatching | NoUnitAvailable} -> RoundComplete`.

use std::io::Write;

use crate::core::config::SimulationConfig;
use crate::core::error::{DispatchError, Result};
use crate::incident::{parse_incident_type, parse_location, Incident, IncidentKind};
use crate::input::InputProvider;
use crate::simulation::state::{RoundOutcome, SimulationState};
use crate::simulation::summary::SimulationSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingIncident,
    Selecting,
    Dispatching,
    NoUnitAvailable,
    RoundComplete,
}

/// Drives a full run against an input provider, narrating to `out`
pub struct RoundController<I: InputProvider, W: Write> {
    config: SimulationConfig,
    input: I,
    out: W,
    phase: RoundPhase,
}

impl<I: InputProvider, W: Write> RoundController<I, W> {
    pub fn new(config: SimulationConfig, input: I, out: W) -> Self {
        Self {
            config,
            input,
            out,
            phase: RoundPhase::AwaitingIncident,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.out)
    }

    /// Play every configured round, then report the final score
    pub fn run(&mut self, state: &mut SimulationState) -> Result<SimulationSummary> {
        tracing::info!(
            "Starting simulation: {} rounds, {} units",
            self.config.rounds,
            state.pool.len()
        );

        for _ in 0..self.config.rounds {
            self.run_round(state)?;
        }

        writeln!(self.out, "\n--- Simulation Ended ---")?;
        writeln!(self.out, "Final Score: {}", state.score())?;
        writeln!(self.out, "Thank you for playing!")?;
        self.out.flush()?;

        tracing::info!("Simulation ended with score {}", state.score());
        Ok(state.summary())
    }

    /// Play a single round
    pub fn run_round(&mut self, state: &mut SimulationState) -> Result<RoundOutcome> {
        self.phase = RoundPhase::AwaitingIncident;
        let round = state.begin_round();
        writeln!(self.out, "\n--- Round {} ---", round)?;

        let incident = self.read_incident()?;

        self.phase = RoundPhase::Selecting;
        let outcome = state.handle_incident(incident);

        match &outcome {
            RoundOutcome::Dispatched { unit, script, .. } => {
                self.phase = RoundPhase::Dispatching;
                for line in script.lines() {
                    writeln!(self.out, "{}", line)?;
                }
                writeln!(self.out, "Response successful! Unit dispatched: {}", unit.name)?;
            }
            RoundOutcome::NoUnitAvailable { incident } => {
                self.phase = RoundPhase::NoUnitAvailable;
                writeln!(
                    self.out,
                    "No suitable unit available to handle the {} incident.",
                    incident.kind
                )?;
            }
        }

        writeln!(self.out, "Current Score: {}", state.score())?;
        writeln!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        // Any line, or end of input, acknowledges
        self.input.read_line()?;

        self.phase = RoundPhase::RoundComplete;
        Ok(outcome)
    }

    /// Prompt for incident type and location
    pub fn read_incident(&mut self) -> Result<Incident> {
        writeln!(self.out, "Available incident types:")?;
        for (i, kind) in IncidentKind::MENU.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, kind.name())?;
        }
        writeln!(
            self.out,
            "Or type the incident type directly (e.g., Crime, Fire, Medical)."
        )?;

        let kind = loop {
            write!(self.out, "Enter the number or name of the incident type: ")?;
            self.out.flush()?;

            let line = self.input.read_line()?.ok_or(DispatchError::InputClosed {
                prompt: "incident type",
            })?;

            match parse_incident_type(&line) {
                Some(kind) => break kind,
                None => {
                    tracing::warn!("Rejected blank incident type");
                    writeln!(
                        self.out,
                        "Invalid input. Please enter a number from the list or the incident type name."
                    )?;
                }
            }
        };

        write!(self.out, "Enter incident location: ")?;
        self.out.flush()?;
        let line = self.input.read_line()?;
        let (location, defaulted) = parse_location(line.as_deref(), &self.config.default_location);
        if defaulted {
            writeln!(
                self.out,
                "Location cannot be empty. Using default location '{}'.",
                location
            )?;
        }

        Ok(Incident::new(kind, location))
    }
}
