use crate::core::direction::DirectionPolicy;
use crate::core::formatter::{format_position, rounded_position};
use crate::core::instruction::parse_instruction;
use crate::core::tracker::PathTracker;
use crate::domain::model::HuntReport;
use crate::domain::ports::PathFinder;

/// Follows route lines such as `"Walk,3 hours 30 mins,NW"` from the origin.
///
/// Every call starts again from the origin, so asking twice gives the same
/// answer.
#[derive(Debug, Clone, Default)]
pub struct TreasureFinder {
    paths: Option<Vec<String>>,
    policy: DirectionPolicy,
}

impl TreasureFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DirectionPolicy) -> Self {
        Self {
            paths: None,
            policy,
        }
    }

    pub fn policy(&self) -> DirectionPolicy {
        self.policy
    }

    pub fn paths(&self) -> Option<&[String]> {
        self.paths.as_deref()
    }

    /// Walk every configured line and report where the route ends. `None`
    /// when there is nothing to follow.
    pub fn follow_paths(&self) -> Option<HuntReport> {
        let paths = self.paths.as_ref().filter(|paths| !paths.is_empty())?;
        let mut tracker = PathTracker::new(self.policy);

        for line in paths {
            match parse_instruction(line) {
                Some(instruction) => {
                    tracker.follow(&instruction);
                }
                None => tracker.skip(),
            }
        }

        let position = tracker.position();
        let report = HuntReport {
            position,
            rounded: rounded_position(position),
            applied: tracker.applied(),
            skipped: tracker.skipped(),
            directions: format_position(position),
        };

        tracing::info!(
            "Followed {} of {} paths: {}",
            report.applied,
            paths.len(),
            report.directions
        );
        Some(report)
    }
}

impl PathFinder for TreasureFinder {
    fn set_paths(&mut self, paths: Option<Vec<String>>) {
        self.paths = paths;
    }

    fn find_treasure(&self) -> Option<String> {
        self.follow_paths().map(|report| report.directions)
    }
}
