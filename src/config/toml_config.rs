use crate::core::direction::DirectionPolicy;
use crate::utils::error::{HuntError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// A hunt described in TOML:
///
/// ```toml
/// [hunt]
/// name = "Skull Island"
/// unknown_direction = "skip"
/// paths = ["Walk,3 hours 30 mins,NW", "Run,45 min,E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntConfig {
    pub hunt: HuntSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntSection {
    pub name: String,
    pub description: Option<String>,
    pub unknown_direction: Option<String>,
    pub paths: Option<Vec<String>>,
}

impl HuntConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HuntError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HuntError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HUNT_START})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("hunt.name", &self.hunt.name)?;
        validation::validate_required_field("hunt.paths", &self.hunt.paths)?;

        if let Some(policy) = &self.hunt.unknown_direction {
            validation::validate_one_of("hunt.unknown_direction", policy, &DirectionPolicy::NAMES)?;
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.hunt.name
    }

    pub fn paths(&self) -> &[String] {
        self.hunt.paths.as_deref().unwrap_or_default()
    }

    /// The configured policy; unset or unrecognized falls back to the default.
    pub fn direction_policy(&self) -> DirectionPolicy {
        self.hunt
            .unknown_direction
            .as_deref()
            .and_then(DirectionPolicy::from_name)
            .unwrap_or_default()
    }
}

impl Validate for HuntConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
