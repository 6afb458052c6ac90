use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl HuntError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HuntError::IoError(e) => format!("Could not read input: {}", e),
            HuntError::SerializationError(e) => format!("Could not render the report: {}", e),
            HuntError::ConfigValidationError { field, message } => {
                format!("The hunt configuration is invalid ({}): {}", field, message)
            }
            HuntError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            HuntError::MissingConfigError { field } => {
                format!("The hunt configuration is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HuntError::IoError(_) => "Check that the file exists and is readable".to_string(),
            HuntError::SerializationError(_) => "Retry with --format text".to_string(),
            HuntError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with a [hunt] table".to_string()
            }
            HuntError::InvalidConfigValueError { reason, .. } => reason.clone(),
            HuntError::MissingConfigError { field } => format!("Add '{}' to the configuration", field),
        }
    }
}

pub type Result<T> = std::result::Result<T, HuntError>;
