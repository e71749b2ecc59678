//! # Common Error Types
//!
//! Consolidated error handling for the dashboard.
//!
//! ## Error Categories
//!
//! - **Validation**: Form input rejected (blank address, label, bot token, chat id)
//! - **State**: An intent that makes no sense in the current state
//! - **Config**: Invalid configuration values
//! - **Notification** / **Resolver**: Failures reported by a boundary port
//! - **Io** / **Json**: Reading the configuration file
//!
//! Validation errors never mutate the stores; the caller surfaces the message
//! and leaves the collections as they were.
//!
//! ```rust
//! use whalewatch::core::error::AppError;
//!
//! let err = AppError::Validation("Label is required".to_string());
//! assert_eq!(err.to_string(), "Validation error: Label is required");
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation error.
    ///
    /// Raised for required form fields that are empty after trimming.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Intent not applicable in the current state.
    ///
    /// For example sending a test notification while the channel is disconnected.
    #[error("State error: {0}")]
    State(String),

    /// Configuration error (intervals or feed capacity out of range).
    #[error("Config error: {0}")]
    Config(String),

    /// Notification delivery port failure.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Balance resolver port failure.
    #[error("Resolver error: {0}")]
    Resolver(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True for errors caused by user input rather than the system
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Message suitable for a toast or inline form hint
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::State(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
