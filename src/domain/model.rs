use serde::{Deserialize, Serialize};
use std::fmt;

/// A way of getting around, and how far it carries you per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walk,
    Run,
    HorseGallop,
    HorseTrot,
    ElephantRide,
    /// Sentinel for names that match no known mode. Never moves.
    Unknown,
}

impl TransportMode {
    pub const KNOWN: [TransportMode; 5] = [
        TransportMode::Walk,
        TransportMode::Run,
        TransportMode::HorseGallop,
        TransportMode::HorseTrot,
        TransportMode::ElephantRide,
    ];

    /// Speed in miles per hour.
    pub fn speed(&self) -> u32 {
        match self {
            TransportMode::Walk => 3,
            TransportMode::Run => 6,
            TransportMode::HorseGallop => 15,
            TransportMode::HorseTrot => 4,
            TransportMode::ElephantRide => 6,
            TransportMode::Unknown => 0,
        }
    }

    /// The name used in instruction lines, or `None` for the sentinel.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            TransportMode::Walk => Some("walk"),
            TransportMode::Run => Some("run"),
            TransportMode::HorseGallop => Some("horse gallop"),
            TransportMode::HorseTrot => Some("horse trot"),
            TransportMode::ElephantRide => Some("elephant ride"),
            TransportMode::Unknown => None,
        }
    }

    /// Case-insensitive exact lookup. Anything unmatched, including no name at
    /// all, resolves to [`TransportMode::Unknown`].
    pub fn resolve(name: Option<&str>) -> TransportMode {
        let Some(name) = name else {
            return TransportMode::Unknown;
        };

        Self::KNOWN
            .into_iter()
            .find(|mode| mode.name().is_some_and(|known| known.eq_ignore_ascii_case(name)))
            .unwrap_or(TransportMode::Unknown)
    }

    pub fn is_known(&self) -> bool {
        *self != TransportMode::Unknown
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("unknown"))
    }
}

/// One leg of the route as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub mode_name: String,
    pub travel_time: Option<String>,
    pub direction: Option<String>,
}

impl Instruction {
    pub fn new(
        mode_name: impl Into<String>,
        travel_time: Option<String>,
        direction: Option<String>,
    ) -> Self {
        Self {
            mode_name: mode_name.into(),
            travel_time,
            direction,
        }
    }

    pub fn mode(&self) -> TransportMode {
        TransportMode::resolve(Some(&self.mode_name))
    }
}

/// A point on the map in miles; +x is East, +y is North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything learned from following one set of paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HuntReport {
    pub position: Position,
    pub rounded: Position,
    pub applied: usize,
    pub skipped: usize,
    pub directions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(TransportMode::resolve(Some("Walk")), TransportMode::Walk);
        assert_eq!(TransportMode::resolve(Some("RUN")), TransportMode::Run);
        assert_eq!(TransportMode::resolve(Some("Horse Gallop")), TransportMode::HorseGallop);
        assert_eq!(TransportMode::resolve(Some("horse trot")), TransportMode::HorseTrot);
        assert_eq!(TransportMode::resolve(Some("Elephant Ride")), TransportMode::ElephantRide);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(TransportMode::resolve(None), TransportMode::Unknown);
        assert_eq!(TransportMode::resolve(Some("swim")), TransportMode::Unknown);
        assert_eq!(TransportMode::resolve(Some(" walk")), TransportMode::Unknown);
        assert_eq!(TransportMode::resolve(Some("")), TransportMode::Unknown);
        assert_eq!(TransportMode::Unknown.speed(), 0);
        assert!(!TransportMode::Unknown.is_known());
    }

    #[test]
    fn test_speeds() {
        let speeds: Vec<u32> = TransportMode::KNOWN.iter().map(|m| m.speed()).collect();
        assert_eq!(speeds, vec![3, 6, 15, 4, 6]);
    }

    #[test]
    fn test_display_uses_instruction_name() {
        assert_eq!(TransportMode::ElephantRide.to_string(), "elephant ride");
        assert_eq!(TransportMode::Unknown.to_string(), "unknown");
    }
}
