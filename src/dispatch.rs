//! Dispatch selection
//!
//! Picks the single best unit for an incident type: among the capable
//! units, the one with the lowest speed value. Ties go to whichever
//! unit comes first in pool order.

use crate::registry::UnitPool;
use crate::units::EmergencyUnit;

/// Best unit for `incident_type`, or `None` when no unit in the pool can handle it.
///
/// Pure query; the pool is not modified.
pub fn select_best<'a>(pool: &'a UnitPool, incident_type: &str) -> Option<&'a EmergencyUnit> {
    let candidates = pool.capable_units(incident_type);
    tracing::debug!(
        "{} candidate(s) for incident type '{}'",
        candidates.len(),
        incident_type
    );

    // min_by_key keeps the first of equal minimums
    candidates.into_iter().min_by_key(|unit| unit.speed)
}

/// Outcome of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDecision<'a> {
    Selected(&'a EmergencyUnit),
    NoSuitableUnit,
}

/// `select_best` as an explicit decision
pub fn decide<'a>(pool: &'a UnitPool, incident_type: &str) -> DispatchDecision<'a> {
    match select_best(pool, incident_type) {
        Some(unit) => DispatchDecision::Selected(unit),
        None => DispatchDecision::NoSuitableUnit,
    }
}
