//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid value for {field}: \"{value}\" ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No appliance with id {0}")]
    ApplianceNotFound(i64),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("Unknown chart period: {0}")]
    UnknownPeriod(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn invalid_input(field: &str, value: &str, reason: &str) -> Self {
        Error::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
