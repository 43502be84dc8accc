use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentError {
    #[error("Student store error: {message}")]
    Store { message: String },

    #[error("College service request failed: {0}")]
    CollegeRequest(#[from] reqwest::Error),

    #[error("College service returned {status} for college id '{college_id}'")]
    CollegeStatus {
        status: reqwest::StatusCode,
        college_id: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl StudentError {
    pub fn store(message: impl Into<String>) -> Self {
        StudentError::Store {
            message: message.into(),
        }
    }

    /// Short machine-readable label used in HTTP error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            StudentError::Store { .. } | StudentError::Io(_) | StudentError::Serialization(_) => {
                "store"
            }
            StudentError::CollegeRequest(_) | StudentError::CollegeStatus { .. } => "college_service",
            StudentError::TomlParse(_)
            | StudentError::ConfigError { .. }
            | StudentError::InvalidConfigValueError { .. }
            | StudentError::MissingConfigError { .. } => "configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, StudentError>;
