pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::HuntPlan, CliConfig, OutputFormat};

pub use config::toml_config::HuntConfig;
pub use core::{direction::DirectionPolicy, finder::TreasureFinder};
pub use domain::model::{HuntReport, Instruction, Position, TransportMode};
pub use domain::ports::PathFinder;
pub use utils::error::{HuntError, Result};
