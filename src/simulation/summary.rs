//! End-of-run summary, printable as text or JSON

use std::fmt;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{RoundNumber, Score};
use crate::simulation::state::RoundOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round: RoundNumber,
    pub incident_type: String,
    pub location: String,
    /// Name of the dispatched unit, if any
    pub unit: Option<String>,
    pub score_after: Score,
}

impl RoundRecord {
    pub fn from_outcome(round: RoundNumber, outcome: &RoundOutcome, score_after: Score) -> Self {
        let incident = outcome.incident();
        Self {
            round,
            incident_type: incident.kind.clone(),
            location: incident.location.clone(),
            unit: outcome.dispatched_unit().map(|u| u.name.clone()),
            score_after,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub rounds_played: RoundNumber,
    pub final_score: Score,
    pub records: Vec<RoundRecord>,
    pub remaining_units: Vec<String>,
}

impl SimulationSummary {
    pub fn dispatch_count(&self) -> usize {
        self.records.iter().filter(|r| r.unit.is_some()).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rounds: {} | Dispatches: {} | Final Score: {}",
            self.rounds_played,
            self.dispatch_count(),
            self.final_score
        )?;
        for record in &self.records {
            let unit = record.unit.as_deref().unwrap_or("no suitable unit");
            writeln!(
                f,
                "  [{}] {} at {} -> {} (score {})",
                record.round, record.incident_type, record.location, unit, record.score_after
            )?;
        }
        write!(f, "Remaining units: {}", self.remaining_units.join(", "))
    }
}
