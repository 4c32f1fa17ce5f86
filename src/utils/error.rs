use crate::domain::model::{SubmitFailure, ValidationFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(ValidationFailure),

    #[error("Submission failed: {0}")]
    Submission(SubmitFailure),

    #[error("Contact endpoint is not connected")]
    NotConnected,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Catalog error: {message}")]
    Catalog { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Network,
    Remote,
    State,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::HttpError(_) => ErrorCategory::Network,
            ContactError::IoError(_) | ContactError::SerializationError(_) => ErrorCategory::Io,
            ContactError::Catalog { .. }
            | ContactError::TomlError(_)
            | ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ContactError::ValidationError(_) => ErrorCategory::Validation,
            ContactError::Submission(SubmitFailure::Network(_)) => ErrorCategory::Network,
            ContactError::Submission(_) => ErrorCategory::Remote,
            ContactError::NotConnected | ContactError::SubmissionInFlight => ErrorCategory::State,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Remote | ErrorCategory::State => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            ContactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ContactError::ValidationError(failure) => failure.message().to_string(),
            ContactError::Submission(failure) => failure.user_message(),
            ContactError::NotConnected => {
                "The contact service is unreachable, so messages cannot be sent right now."
                    .to_string()
            }
            ContactError::SubmissionInFlight => {
                "A message is already being sent. Please wait.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set --endpoint (or CONTACT_ENDPOINT) to an http(s) URL, or check the config file"
            }
            ErrorCategory::Validation => "Fill in name, email and message with a valid address",
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Remote => "The remote service rejected the request; try again later",
            ErrorCategory::State => "Wait for the current operation to finish and retry",
            ErrorCategory::Io => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
