pub mod config;
pub mod error;
pub mod types;

pub use config::{SimulationConfig, UnitSpec};
pub use error::{DispatchError, Result};
pub use types::{RoundNumber, Score, UnitId};
