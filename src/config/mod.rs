#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::direction::DirectionPolicy;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Directions only
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "treasure-hunt")]
#[command(about = "Follow travel instructions and point the way to the treasure")]
pub struct CliConfig {
    /// Instructions such as "Walk,3 hours 30 mins,NW"
    pub paths: Vec<String>,

    /// File with one instruction per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML hunt file with a [hunt] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// What to do with direction codes that are not a compass point
    #[arg(long, value_enum)]
    pub unknown_direction: Option<DirectionPolicy>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::parse_from([
            "treasure-hunt",
            "Walk,60 min,N",
            "Run,1 hour,W",
            "--unknown-direction",
            "skip",
            "--format",
            "json",
        ]);

        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.unknown_direction, Some(DirectionPolicy::Skip));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["treasure-hunt"]);
        assert!(config.paths.is_empty());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.unknown_direction.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_empty_input_path_is_invalid() {
        let config = CliConfig::parse_from(["treasure-hunt", "--input", ""]);
        assert!(config.validate().is_err());
    }
}
