//! Incidents and the parsing of incident input
//!
//! The incident type is free text: a player can pick from the numbered
//! menu or type any name. Types no unit can handle are still valid
//! incidents; they simply find no responder.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Menu entries offered each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentKind {
    Crime,
    Fire,
    Medical,
}

impl IncidentKind {
    /// Menu order, numbered from 1
    pub const MENU: [IncidentKind; 3] = [IncidentKind::Crime, IncidentKind::Fire, IncidentKind::Medical];

    pub fn name(&self) -> &'static str {
        match self {
            IncidentKind::Crime => "Crime",
            IncidentKind::Fire => "Fire",
            IncidentKind::Medical => "Medical",
        }
    }

    /// 1-based menu lookup
    pub fn from_menu_index(choice: usize) -> Option<IncidentKind> {
        choice.checked_sub(1).and_then(|i| Self::MENU.get(i).copied())
    }
}

/// A single emergency, created for one round and discarded afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub kind: String,
    pub location: String,
}

impl Incident {
    pub fn new(kind: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            location: location.into(),
        }
    }
}

/// Interpret a line typed at the incident type prompt.
///
/// A valid menu number maps to its menu entry; any other non-blank text
/// is taken verbatim (trimmed). Blank input yields `None` and should be
/// re-prompted.
pub fn parse_incident_type(input: &str) -> Option<String> {
    let input = input.trim();

    if let Some(kind) = input.parse::<usize>().ok().and_then(IncidentKind::from_menu_index) {
        return Some(kind.name().to_string());
    }

    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// Interpret a line typed at the location prompt.
///
/// Returns the location and whether the default was substituted.
/// A closed stream (`None`) counts as blank.
pub fn parse_location(input: Option<&str>, default_location: &str) -> (String, bool) {
    match input.map(str::trim) {
        Some(location) if !location.is_empty() => (location.to_string(), false),
        _ => (default_location.to_string(), true),
    }
}

/// Places random incidents are reported at
pub const RANDOM_LOCATIONS: [&str; 8] = [
    "Main Street",
    "Harbor District",
    "Central Park",
    "Old Town",
    "Industrial Zone",
    "University Campus",
    "Riverside",
    "Airport Road",
];

/// Draw a random menu incident at a random location
pub fn random_incident<R: Rng + ?Sized>(rng: &mut R) -> Incident {
    let kind = IncidentKind::MENU[rng.gen_range(0..IncidentKind::MENU.len())];
    let location = RANDOM_LOCATIONS.choose(rng).copied().unwrap_or("Unknown");
    Incident::new(kind.name(), location)
}
