// src/error.rs

//! Unified error handling for the jobscout application.

use std::fmt;

use thiserror::Error;

/// Result type alias for jobscout operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation failed before any I/O was attempted
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP request to the job search page failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The search page explicitly reported zero matches
    #[error("No results found for {mode} search")]
    NoResults { mode: String },

    /// The response could not be interpreted as a job listing page
    #[error("Parse error for {context}: {message}")]
    Parse { context: String, message: String },

    /// Seen-state persistence failed
    #[error("Store error: {0}")]
    Store(String),

    /// Email delivery failed
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a zero-results error for a search mode.
    pub fn no_results(mode: impl fmt::Display) -> Self {
        Self::NoResults {
            mode: mode.to_string(),
        }
    }

    /// Create a parse error with context.
    pub fn parse(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a store error.
    pub fn store(message: impl fmt::Display) -> Self {
        Self::Store(message.to_string())
    }

    /// Create a delivery error.
    pub fn delivery(message: impl fmt::Display) -> Self {
        Self::Delivery(message.to_string())
    }
}
