//! Emergency Dispatch - turn-based emergency response simulation

pub mod core;
pub mod dispatch;
pub mod incident;
pub mod input;
pub mod registry;
pub mod simulation;
pub mod units;
