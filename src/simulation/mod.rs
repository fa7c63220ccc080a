//! Round-based simulation
//!
//! `SimulationState` owns the unit pool and score; `RoundController`
//! feeds it incidents from an `InputProvider` and narrates the result.

pub mod round;
pub mod state;
pub mod summary;

pub use round::{RoundController, RoundPhase};
pub use state::{RoundOutcome, SimulationState};
pub use summary::{RoundRecord, SimulationSummary};
