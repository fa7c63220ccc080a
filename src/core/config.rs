//! Simulation configuration
//!
//! The interactive game always runs with `SimulationConfig::default()`.
//! The headless runner can load an alternative roster from TOML:
//!
//! ```toml
//! rounds = 5
//! score_per_dispatch = 10
//!
//! [[units]]
//! name = "Police Unit 1"
//! speed = 60
//! capability = "Police"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DispatchError, Result};
use crate::core::types::Score;
use crate::units::{Capability, EmergencyUnit};

/// One roster entry, turned into an `EmergencyUnit` at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    /// Lower is faster
    pub speed: u32,
    pub capability: Capability,
}

impl UnitSpec {
    pub fn new(name: &str, speed: u32, capability: Capability) -> Self {
        Self {
            name: name.to_string(),
            speed,
            capability,
        }
    }

    pub fn build(&self) -> EmergencyUnit {
        EmergencyUnit::new(&self.name, self.speed, self.capability)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of rounds played before the final score is reported
    pub rounds: u32,

    /// Points awarded for every successful dispatch
    pub score_per_dispatch: Score,

    /// Location recorded when the player leaves the location blank
    pub default_location: String,

    /// Initial unit pool, in pool order
    pub units: Vec<UnitSpec>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            score_per_dispatch: 10,
            default_location: "Unknown".to_string(),
            units: default_roster(),
        }
    }
}

/// The six-unit roster the game starts with
pub fn default_roster() -> Vec<UnitSpec> {
    vec![
        UnitSpec::new("Police Unit 1", 60, Capability::Police),
        UnitSpec::new("Police Unit 2", 50, Capability::Police),
        UnitSpec::new("Fire Truck 1", 45, Capability::Fire),
        UnitSpec::new("Fire Truck 2", 55, Capability::Fire),
        UnitSpec::new("Ambulance 1", 70, Capability::Medical),
        UnitSpec::new("Ambulance 2", 65, Capability::Medical),
    ]
}

impl SimulationConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "Loaded config from {:?}: {} rounds, {} units",
            path,
            config.rounds,
            config.units.len()
        );
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(DispatchError::Config("rounds must be at least 1".into()));
        }

        let max_score = u64::from(self.rounds) * u64::from(self.score_per_dispatch);
        if max_score > u64::from(Score::MAX) {
            return Err(DispatchError::Config(format!(
                "rounds ({}) x score_per_dispatch ({}) exceeds the maximum score {}",
                self.rounds,
                self.score_per_dispatch,
                Score::MAX
            )));
        }

        if self.default_location.trim().is_empty() {
            return Err(DispatchError::Config(
                "default_location must not be blank".into(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.units {
            if spec.name.trim().is_empty() {
                return Err(DispatchError::Config("unit names must not be blank".into()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(DispatchError::Config(format!(
                    "duplicate unit name '{}'",
                    spec.name
                )));
            }
        }

        Ok(())
    }
}
