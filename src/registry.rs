//! Unit registry: the pool of units still available for dispatch

use serde::Serialize;

use crate::core::config::UnitSpec;
use crate::core::types::UnitId;
use crate::units::EmergencyUnit;

/// Ordered pool of available units, unique by `UnitId`
#[derive(Debug, Clone, Default, Serialize)]
pub struct UnitPool {
    units: Vec<EmergencyUnit>,
}

impl UnitPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from roster entries, keeping roster order
    pub fn from_specs(specs: &[UnitSpec]) -> Self {
        let mut pool = Self::new();
        for spec in specs {
            pool.add(spec.build());
        }
        pool
    }

    /// Append a unit. Returns false if a unit with the same id is already present.
    pub fn add(&mut self, unit: EmergencyUnit) -> bool {
        if self.contains(unit.id) {
            return false;
        }
        self.units.push(unit);
        true
    }

    /// All units able to handle `incident_type`, in pool order
    pub fn capable_units(&self, incident_type: &str) -> Vec<&EmergencyUnit> {
        self.units
            .iter()
            .filter(|unit| unit.can_handle(incident_type))
            .collect()
    }

    /// Remove a unit by identity. Absent ids are ignored.
    pub fn remove(&mut self, id: UnitId) -> Option<EmergencyUnit> {
        let idx = self.index_of(id)?;
        Some(self.units.remove(idx))
    }

    pub fn index_of(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|unit| unit.id == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmergencyUnit> {
        self.units.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.units.iter().map(|unit| unit.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<EmergencyUnit> for UnitPool {
    fn from_iter<T: IntoIterator<Item = EmergencyUnit>>(iter: T) -> Self {
        let mut pool = Self::new();
        for unit in iter {
            pool.add(unit);
        }
        pool
    }
}
