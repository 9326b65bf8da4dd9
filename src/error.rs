use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} returned HTTP {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("{operation} failed validation: {message}")]
    Validation {
        operation: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PokedexError {
    /// Validation failure for the given operation, with a display-able cause.
    pub fn validation(operation: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Validation {
            operation,
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
