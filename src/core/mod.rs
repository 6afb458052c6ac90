pub mod direction;
pub mod duration;
pub mod finder;
pub mod formatter;
pub mod instruction;
pub mod tracker;

pub use crate::domain::model::{HuntReport, Instruction, Position, TransportMode};
pub use crate::domain::ports::PathFinder;
