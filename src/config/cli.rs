use crate::config::toml_config::HuntConfig;
use crate::config::CliConfig;
use crate::core::direction::DirectionPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs;
use std::path::Path;

/// Paths and policy gathered from the command line and the files it names.
#[derive(Debug, Clone, PartialEq)]
pub struct HuntPlan {
    pub name: Option<String>,
    pub paths: Option<Vec<String>>,
    pub policy: DirectionPolicy,
}

/// Instruction lines from a plain text file. Blank lines and lines starting
/// with `#` are ignored; the rest are kept exactly as written.
pub fn read_instruction_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_string)
        .collect())
}

impl CliConfig {
    /// Resolve where the paths come from: arguments first, then `--input`,
    /// then the hunt file. `--unknown-direction` overrides the hunt file.
    pub fn plan(&self) -> Result<HuntPlan> {
        let hunt = match &self.config {
            Some(path) => {
                tracing::debug!("Loading hunt file {}", path);
                let hunt = HuntConfig::from_file(path)?;
                hunt.validate()?;
                Some(hunt)
            }
            None => None,
        };

        let paths = if !self.paths.is_empty() {
            tracing::debug!("Using {} paths from arguments", self.paths.len());
            Some(self.paths.clone())
        } else if let Some(input) = &self.input {
            tracing::debug!("Reading paths from {}", input);
            Some(read_instruction_file(input)?)
        } else {
            hunt.as_ref().map(|hunt| hunt.paths().to_vec())
        };

        let policy = self
            .unknown_direction
            .or_else(|| hunt.as_ref().map(HuntConfig::direction_policy))
            .unwrap_or_default();

        Ok(HuntPlan {
            name: hunt.map(|hunt| hunt.name().to_string()),
            paths,
            policy,
        })
    }
}
