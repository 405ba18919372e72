//! Error types for the Bibliotheca client

use std::collections::HashMap;

use thiserror::Error;

/// Main client error type
///
/// Facade errors are never retried or recovered inside the crate; they
/// propagate to the caller as one of these variants for direct display.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Field-level messages as returned by the backend (`errors` envelope key).
        errors: HashMap<String, Vec<String>>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Loan quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Loan cannot be extended: {0}")]
    NotExtendable(String),

    #[error("Malformed entity: {0}")]
    MalformedEntity(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// Validation error without field detail.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            errors: HashMap::new(),
        }
    }

    /// True when the error is a loan-policy rejection rather than a payload problem.
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, ApiError::QuotaExceeded(_) | ApiError::NotExtendable(_))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        let errors = e
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        ApiError::Validation {
            message: "Invalid request payload".to_string(),
            errors,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedEntity(e.to_string())
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
