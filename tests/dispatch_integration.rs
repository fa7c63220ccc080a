//! Dispatch simulation integration tests
//!
//! Full rounds driven through scripted input: selection, retirement of
//! dispatched units, scoring and pool exhaustion.

use std::path::Path;

use emergency_dispatch::core::config::SimulationConfig;
use emergency_dispatch::core::error::DispatchError;
use emergency_dispatch::input::{AutoResponder, ScriptedInput};
use emergency_dispatch::registry::UnitPool;
use emergency_dispatch::simulation::{RoundController, RoundOutcome, SimulationState};
use emergency_dispatch::units::EmergencyUnit;

fn three_unit_pool() -> UnitPool {
    UnitPool::from_iter([
        EmergencyUnit::police("P1", 60),
        EmergencyUnit::police("P2", 50),
        EmergencyUnit::firefighter("F1", 45),
    ])
}

fn scripted(lines: &[&str]) -> ScriptedInput {
    ScriptedInput::new(lines.iter().copied())
}

/// Crime goes to the faster of the two police units
#[test]
fn test_crime_selects_fastest_police() {
    let mut state = SimulationState::with_pool(three_unit_pool(), 10);
    let mut controller = RoundController::new(
        SimulationConfig::default(),
        scripted(&["crime", "Bank", ""]),
        Vec::<u8>::new(),
    );

    let outcome = controller.run_round(&mut state).unwrap();

    assert_eq!(outcome.dispatched_unit().unwrap().name, "P2");
    assert_eq!(state.pool.names(), vec!["P1", "F1"]);
    assert_eq!(state.score(), 10);
}

/// Unknown incident types find no responder and leave everything untouched
#[test]
fn test_unmatched_type_leaves_state_unchanged() {
    let mut state = SimulationState::with_pool(three_unit_pool(), 10);
    let mut controller = RoundController::new(
        SimulationConfig::default(),
        scripted(&["flood", "Riverside", ""]),
        Vec::<u8>::new(),
    );

    let outcome = controller.run_round(&mut state).unwrap();

    assert!(matches!(outcome, RoundOutcome::NoUnitAvailable { .. }));
    assert_eq!(state.score(), 0);
    assert_eq!(state.pool.names(), vec!["P1", "P2", "F1"]);

    let (_, out) = controller.into_parts();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No suitable unit available to handle the flood incident."));
}

#[test]
fn test_blank_location_stored_as_unknown() {
    let mut state = SimulationState::with_pool(three_unit_pool(), 10);
    let mut controller = RoundController::new(
        SimulationConfig::default(),
        scripted(&["1", "", ""]),
        Vec::<u8>::new(),
    );

    let outcome = controller.run_round(&mut state).unwrap();
    assert_eq!(outcome.incident().location, "Unknown");
    assert_eq!(state.records()[0].location, "Unknown");
}

/// Five fires against two firefighters: two dispatches, then exhaustion
#[test]
fn test_fire_pool_exhaustion() {
    let pool = UnitPool::from_iter([
        EmergencyUnit::firefighter("F1", 45),
        EmergencyUnit::firefighter("F2", 55),
        EmergencyUnit::police("P1", 60),
    ]);
    let mut state = SimulationState::with_pool(pool, 10);

    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.extend(["fire", "Warehouse", ""]);
    }
    let mut controller = RoundController::new(SimulationConfig::default(), scripted(&lines), Vec::<u8>::new());
    let summary = controller.run(&mut state).unwrap();

    let units: Vec<_> = summary.records.iter().map(|r| r.unit.as_deref()).collect();
    assert_eq!(units, vec![Some("F1"), Some("F2"), None, None, None]);

    let scores: Vec<_> = summary.records.iter().map(|r| r.score_after).collect();
    assert_eq!(scores, vec![10, 20, 20, 20, 20]);
    assert_eq!(summary.final_score, 20);
    assert_eq!(summary.remaining_units, vec!["P1"]);
}

/// A dispatched unit never comes back, and the score only grows by 10 per dispatch
#[test]
fn test_full_default_game() {
    let config = SimulationConfig::default();
    let mut state = SimulationState::new(&config);
    let lines = [
        "1", "Bank", "",
        "crime", "Mall", "",
        "CRIME", "Park", "",
        "2", "", "",
        "Medical", "School", "",
    ];
    let mut controller = RoundController::new(config, scripted(&lines), Vec::<u8>::new());
    let summary = controller.run(&mut state).unwrap();

    let units: Vec<_> = summary.records.iter().map(|r| r.unit.as_deref()).collect();
    assert_eq!(
        units,
        vec![
            Some("Police Unit 2"),
            Some("Police Unit 1"),
            None,
            Some("Fire Truck 1"),
            Some("Ambulance 2"),
        ]
    );
    assert_eq!(summary.rounds_played, 5);
    assert_eq!(summary.final_score, 10 * summary.dispatch_count() as u32);
    assert_eq!(summary.final_score, 40);
    assert_eq!(summary.remaining_units, vec!["Fire Truck 2", "Ambulance 1"]);

    let mut last = 0;
    for record in &summary.records {
        assert!(record.score_after >= last);
        last = record.score_after;
    }

    let (_, out) = controller.into_parts();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("--- Simulation Ended ---"));
    assert!(text.contains("Final Score: 40"));
}

#[test]
fn test_input_closed_mid_game_is_fatal() {
    let config = SimulationConfig::default();
    let mut state = SimulationState::new(&config);
    let mut controller = RoundController::new(config, scripted(&["fire", "Docks", ""]), Vec::<u8>::new());

    let result = controller.run(&mut state);

    assert!(matches!(result, Err(DispatchError::InputClosed { .. })));
    assert_eq!(state.score(), 10);
}

#[test]
fn test_auto_responder_plays_configured_rounds() {
    let mut config = SimulationConfig::default();
    config.rounds = 8;
    let mut state = SimulationState::new(&config);
    let mut controller = RoundController::new(config, AutoResponder::with_seed(42), Vec::<u8>::new());

    let summary = controller.run(&mut state).unwrap();

    assert_eq!(summary.rounds_played, 8);
    assert_eq!(summary.records.len(), 8);
    assert_eq!(summary.final_score, 10 * summary.dispatch_count() as u32);
    assert_eq!(summary.remaining_units.len(), 6 - summary.dispatch_count());
}

#[test]
fn test_shipped_roster_matches_defaults() {
    let loaded = SimulationConfig::load(Path::new("data/default_roster.toml")).unwrap();
    let defaults = SimulationConfig::default();
    assert_eq!(loaded.rounds, defaults.rounds);
    assert_eq!(loaded.score_per_dispatch, defaults.score_per_dispatch);
    assert_eq!(loaded.units, defaults.units);
}
