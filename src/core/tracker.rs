use crate::core::direction::DirectionPolicy;
use crate::core::duration::parse_minutes;
use crate::domain::model::{Instruction, Position, TransportMode};

/// Miles covered travelling `minutes` by `mode`.
pub fn distance(mode: TransportMode, minutes: u64) -> f64 {
    f64::from(mode.speed()) * (minutes as f64 / 60.0)
}

/// Move `position` for `minutes` by `mode` heading `angle_degrees`.
pub fn apply(position: Position, mode: TransportMode, minutes: u64, angle_degrees: f64) -> Position {
    let dis = distance(mode, minutes);
    let theta = angle_degrees.to_radians();
    Position::new(position.x + dis * theta.cos(), position.y + dis * theta.sin())
}

/// Accumulates a position over a route, one instruction at a time.
#[derive(Debug, Clone)]
pub struct PathTracker {
    position: Position,
    policy: DirectionPolicy,
    applied: usize,
    skipped: usize,
}

impl PathTracker {
    pub fn new(policy: DirectionPolicy) -> Self {
        Self {
            position: Position::ORIGIN,
            policy,
            applied: 0,
            skipped: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Count a line that never made it to an instruction.
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Follow one instruction. Returns `false` when it left the position
    /// untouched because its mode, travel time or direction was unusable.
    pub fn follow(&mut self, instruction: &Instruction) -> bool {
        let mode = instruction.mode();
        let (Some(time), Some(direction)) = (&instruction.travel_time, &instruction.direction)
        else {
            tracing::debug!("Skipping '{}': incomplete instruction", instruction.mode_name);
            self.skipped += 1;
            return false;
        };

        if !mode.is_known() {
            tracing::debug!("Skipping unknown mode '{}'", instruction.mode_name);
            self.skipped += 1;
            return false;
        }

        let Some(angle) = self.policy.angle_for(direction) else {
            tracing::debug!("Skipping unrecognized direction '{}'", direction);
            self.skipped += 1;
            return false;
        };

        let minutes = parse_minutes(time);
        self.position = apply(self.position, mode, minutes, angle);
        self.applied += 1;

        tracing::debug!(
            "{} for {} min at {} deg -> ({:.4}, {:.4})",
            mode,
            minutes,
            angle,
            self.position.x,
            self.position.y
        );
        true
    }
}

impl Default for PathTracker {
    fn default() -> Self {
        Self::new(DirectionPolicy::default())
    }
}
