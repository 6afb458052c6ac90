//! Compass codes to angles. 0 degrees is due East and angles grow
//! counter-clockwise, so cosine gives the East component and sine the North.

use serde::{Deserialize, Serialize};

/// What to do with a direction code that is present but not one of the eight
/// compass points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Head East, as legacy route sheets expect.
    #[default]
    East,
    /// Stay put.
    Skip,
}

impl DirectionPolicy {
    pub const NAMES: [&'static str; 2] = ["east", "skip"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "east" => Some(DirectionPolicy::East),
            "skip" => Some(DirectionPolicy::Skip),
            _ => None,
        }
    }

    /// The angle to travel for `code`, or `None` if the leg should not move.
    pub fn angle_for(&self, code: &str) -> Option<f64> {
        match (compass_angle(code), self) {
            (Some(angle), _) => Some(angle),
            (None, DirectionPolicy::East) => Some(0.0),
            (None, DirectionPolicy::Skip) => None,
        }
    }
}

/// Angle in degrees for one of `E NE N NW W SW S SE`. Matching is exact.
pub fn compass_angle(code: &str) -> Option<f64> {
    let degrees = match code {
        "E" => 0.0,
        "NE" => 45.0,
        "N" => 90.0,
        "NW" => 135.0,
        "W" => 180.0,
        "SW" => 225.0,
        "S" => 270.0,
        "SE" => 315.0,
        _ => return None,
    };
    Some(degrees)
}

/// Like [`compass_angle`], falling back to East for anything unrecognized.
pub fn angle_degrees(code: Option<&str>) -> f64 {
    code.and_then(compass_angle).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_points() {
        let expected = [
            ("E", 0.0),
            ("NE", 45.0),
            ("N", 90.0),
            ("NW", 135.0),
            ("W", 180.0),
            ("SW", 225.0),
            ("S", 270.0),
            ("SE", 315.0),
        ];
        for (code, degrees) in expected {
            assert_eq!(compass_angle(code), Some(degrees), "code {}", code);
        }
    }

    #[test]
    fn test_unrecognized_defaults_to_east() {
        assert_eq!(angle_degrees(None), 0.0);
        assert_eq!(angle_degrees(Some("n")), 0.0);
        assert_eq!(angle_degrees(Some(" N")), 0.0);
        assert_eq!(angle_degrees(Some("NNE")), 0.0);
        assert_eq!(angle_degrees(Some("W")), 180.0);
    }

    #[test]
    fn test_policy() {
        assert_eq!(DirectionPolicy::East.angle_for("up"), Some(0.0));
        assert_eq!(DirectionPolicy::Skip.angle_for("up"), None);
        assert_eq!(DirectionPolicy::Skip.angle_for("SW"), Some(225.0));
        assert_eq!(DirectionPolicy::default(), DirectionPolicy::East);
    }

    #[test]
    fn test_policy_names() {
        for name in DirectionPolicy::NAMES {
            assert!(DirectionPolicy::from_name(name).is_some());
        }
        assert_eq!(DirectionPolicy::from_name("West"), None);
    }
}
