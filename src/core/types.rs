//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an emergency unit
///
/// Two units with the same name and speed are still distinct units;
/// pool membership is tracked by this id, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulated dispatch score
pub type Score = u32;

/// 1-based round counter
pub type RoundNumber = u32;
