use crate::domain::model::Position;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const ARRIVED: &str = "You have arrived.";

const NORTH: &str = "North";
const SOUTH: &str = "South";
const EAST: &str = "East";
const WEST: &str = "West";

/// Smallest magnitude that survives rounding to two places.
const HALF_CENT: f64 = 0.005;

/// Round to two decimal places, ties away from zero.
///
/// Rounding works on the shortest decimal text of `value`, so `1.005` rounds
/// to `1.01` even though its binary value sits just below.
pub fn round_half_up(value: f64) -> Decimal {
    if value.is_nan() || value.abs() < HALF_CENT {
        return Decimal::ZERO;
    }

    let exact = Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_default();
    exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `position` with both coordinates rounded as in [`round_half_up`].
pub fn rounded_position(position: Position) -> Position {
    Position::new(
        round_half_up(position.x).to_f64().unwrap_or_default(),
        round_half_up(position.y).to_f64().unwrap_or_default(),
    )
}

/// Plain-language directions from the origin to `position`, e.g.
/// `"2.12 mile(s) to the North, 2.12 mile(s) to the West"`.
pub fn format_position(position: Position) -> String {
    let x = round_half_up(position.x);
    let y = round_half_up(position.y);

    if x.is_zero() && y.is_zero() {
        return ARRIVED.to_string();
    }

    let mut clauses = Vec::with_capacity(2);
    if let Some(heading) = heading(y, NORTH, SOUTH) {
        clauses.push(clause(y, heading));
    }
    if let Some(heading) = heading(x, EAST, WEST) {
        clauses.push(clause(x, heading));
    }
    clauses.join(", ")
}

fn heading(value: Decimal, positive: &'static str, negative: &'static str) -> Option<&'static str> {
    if value.is_zero() {
        None
    } else if value.is_sign_positive() {
        Some(positive)
    } else {
        Some(negative)
    }
}

fn clause(value: Decimal, heading: &str) -> String {
    format!("{} mile(s) to the {}", value.abs().normalize(), heading)
}
