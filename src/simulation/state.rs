//! Simulation state threaded through every round

use crate::core::config::SimulationConfig;
use crate::core::types::{RoundNumber, Score};
use crate::dispatch::{decide, DispatchDecision};
use crate::incident::Incident;
use crate::registry::UnitPool;
use crate::simulation::summary::{RoundRecord, SimulationSummary};
use crate::units::{EmergencyUnit, ResponseScript};

/// Result of handling one incident
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Dispatched {
        incident: Incident,
        unit: EmergencyUnit,
        script: ResponseScript,
    },
    NoUnitAvailable {
        incident: Incident,
    },
}

impl RoundOutcome {
    pub fn incident(&self) -> &Incident {
        match self {
            RoundOutcome::Dispatched { incident, .. } => incident,
            RoundOutcome::NoUnitAvailable { incident } => incident,
        }
    }

    pub fn dispatched_unit(&self) -> Option<&EmergencyUnit> {
        match self {
            RoundOutcome::Dispatched { unit, .. } => Some(unit),
            RoundOutcome::NoUnitAvailable { .. } => None,
        }
    }
}

/// Pool, score and round counter for one run
///
/// Created once at startup, mutated by the round controller, dropped at exit.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub pool: UnitPool,
    score: Score,
    pub round: RoundNumber,
    score_per_dispatch: Score,
    records: Vec<RoundRecord>,
}

impl SimulationState {
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_pool(UnitPool::from_specs(&config.units), config.score_per_dispatch)
    }

    pub fn with_pool(pool: UnitPool, score_per_dispatch: Score) -> Self {
        Self {
            pool,
            score: 0,
            round: 0,
            score_per_dispatch,
            records: Vec::new(),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Advance the round counter; returns the new 1-based round number
    pub fn begin_round(&mut self) -> RoundNumber {
        self.round += 1;
        self.round
    }

    /// Select, respond, score and retire: the non-I/O half of a round.
    ///
    /// On success the chosen unit leaves the pool for good and the score
    /// grows by the configured increment. Otherwise nothing changes.
    pub fn handle_incident(&mut self, incident: Incident) -> RoundOutcome {
        let selected = match decide(&self.pool, &incident.kind) {
            DispatchDecision::Selected(unit) => Some(unit.id),
            DispatchDecision::NoSuitableUnit => None,
        };

        let outcome = match selected.and_then(|id| self.pool.remove(id)) {
            Some(unit) => {
                let script = unit.respond(&incident);
                // Never wraps, so the score cannot go down
                self.score = self.score.saturating_add(self.score_per_dispatch);
                tracing::info!(
                    "Round {}: dispatched {} to {} at {} (score {})",
                    self.round,
                    unit.name,
                    incident.kind,
                    incident.location,
                    self.score
                );
                RoundOutcome::Dispatched {
                    incident,
                    unit,
                    script,
                }
            }
            None => {
                tracing::warn!(
                    "Round {}: no suitable unit for '{}' incident",
                    self.round,
                    incident.kind
                );
                RoundOutcome::NoUnitAvailable { incident }
            }
        };

        self.records.push(RoundRecord::from_outcome(self.round, &outcome, self.score));
        outcome
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            rounds_played: self.round,
            final_score: self.score,
            records: self.records.clone(),
            remaining_units: self.pool.names().into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> SimulationState {
        let pool = UnitPool::from_iter([
            EmergencyUnit::police("P1", 60),
            EmergencyUnit::police("P2", 50),
            EmergencyUnit::firefighter("F1", 45),
        ]);
        SimulationState::with_pool(pool, 10)
    }

    #[test]
    fn test_crime_dispatches_fastest_police() {
        let mut state = sample_state();
        state.begin_round();
        let outcome = state.handle_incident(Incident::new("crime", "Main Street"));

        assert_eq!(outcome.dispatched_unit().map(|u| u.name.as_str()), Some("P2"));
        assert_eq!(state.pool.names(), vec!["P1", "F1"]);
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_unmatched_incident_changes_nothing() {
        let mut state = sample_state();
        state.begin_round();
        let outcome = state.handle_incident(Incident::new("flood", "Riverside"));

        assert!(matches!(outcome, RoundOutcome::NoUnitAvailable { .. }));
        assert_eq!(state.score(), 0);
        assert_eq!(state.pool.names(), vec!["P1", "P2", "F1"]);
    }

    #[test]
    fn test_huge_increment_never_lowers_score() {
        let pool = UnitPool::from_iter([
            EmergencyUnit::firefighter("F1", 45),
            EmergencyUnit::firefighter("F2", 55),
        ]);
        let mut state = SimulationState::with_pool(pool, 3_000_000_000);

        state.begin_round();
        state.handle_incident(Incident::new("fire", "Docks"));
        let first = state.score();
        state.begin_round();
        state.handle_incident(Incident::new("fire", "Docks"));

        assert_eq!(first, 3_000_000_000);
        assert!(state.score() >= first);
        assert_eq!(state.score(), Score::MAX);
    }

    #[test]
    fn test_records_track_each_round() {
        let mut state = sample_state();
        state.begin_round();
        state.handle_incident(Incident::new("fire", "Docks"));
        state.begin_round();
        state.handle_incident(Incident::new("fire", "Docks"));

        let records = state.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].unit.as_deref(), Some("F1"));
        assert_eq!(records[0].score_after, 10);
        assert_eq!(records[1].unit, None);
        assert_eq!(records[1].score_after, 10);
    }

    #[test]
    fn test_summary_lists_remaining_units() {
        let mut state = sample_state();
        state.begin_round();
        state.handle_incident(Incident::new("Crime", "Unknown"));

        let summary = state.summary();
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.final_score, 10);
        assert_eq!(summary.remaining_units, vec!["P1", "F1"]);
    }
}
