//! Emergency units and what they can respond to
//!
//! A unit's capability is fixed when it is created. Police handle crime,
//! firefighters handle fires and ambulances handle medical emergencies.

pub mod script;

use serde::{Deserialize, Serialize};

use crate::core::types::UnitId;
use crate::incident::Incident;

pub use script::ResponseScript;

/// Incident category a unit can respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Police,
    Fire,
    Medical,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Police, Capability::Fire, Capability::Medical];

    /// Incident type this capability answers to
    pub fn incident_name(&self) -> &'static str {
        match self {
            Capability::Police => "Crime",
            Capability::Fire => "Fire",
            Capability::Medical => "Medical",
        }
    }

    /// Display name of units with this capability
    pub fn unit_kind(&self) -> &'static str {
        match self {
            Capability::Police => "Police",
            Capability::Fire => "Firefighter",
            Capability::Medical => "Ambulance",
        }
    }

    /// Case-insensitive match against a free-text incident type
    pub fn handles(&self, incident_type: &str) -> bool {
        incident_type.to_lowercase() == self.incident_name().to_lowercase()
    }
}

/// A unit in the dispatch pool
///
/// Clones share the same `id`, so a cloned unit still identifies the
/// pool entry it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyUnit {
    pub id: UnitId,
    pub name: String,
    /// Lower is faster
    pub speed: u32,
    pub capability: Capability,
}

impl EmergencyUnit {
    pub fn new(name: &str, speed: u32, capability: Capability) -> Self {
        Self {
            id: UnitId::new(),
            name: name.to_string(),
            speed,
            capability,
        }
    }

    pub fn police(name: &str, speed: u32) -> Self {
        Self::new(name, speed, Capability::Police)
    }

    pub fn firefighter(name: &str, speed: u32) -> Self {
        Self::new(name, speed, Capability::Fire)
    }

    pub fn ambulance(name: &str, speed: u32) -> Self {
        Self::new(name, speed, Capability::Medical)
    }

    pub fn can_handle(&self, incident_type: &str) -> bool {
        self.capability.handles(incident_type)
    }

    /// Narrative this unit produces when sent to `incident`
    pub fn respond(&self, incident: &Incident) -> ResponseScript {
        ResponseScript::for_unit(self, &incident.location)
    }
}
