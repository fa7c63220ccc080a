//! Response scripts: the three-line narrative a unit produces on dispatch

use serde::Serialize;

use super::{Capability, EmergencyUnit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseScript {
    pub arrival: String,
    pub action: String,
    pub resolution: String,
}

impl ResponseScript {
    pub fn for_unit(unit: &EmergencyUnit, location: &str) -> Self {
        let (arrival, action, resolution) = match unit.capability {
            Capability::Police => (
                format!(
                    "{} is responding to a crime at {}. Officer on scene.",
                    unit.name, location
                ),
                "Investigating the situation.",
                "Suspect apprehended.",
            ),
            Capability::Fire => (
                format!(
                    "{} is responding to a fire at {}. Firefighters arriving.",
                    unit.name, location
                ),
                "Locating the source of the fire.",
                "Fire extinguished.",
            ),
            Capability::Medical => (
                format!(
                    "{} is responding to a medical emergency at {}. Paramedics en route.",
                    unit.name, location
                ),
                "Assessing the patient's condition.",
                "Patient stabilized and transported to hospital.",
            ),
        };

        Self {
            arrival,
            action: action.to_string(),
            resolution: resolution.to_string(),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.arrival, &self.action, &self.resolution]
    }
}
