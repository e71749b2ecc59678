//! Validation utilities for form input

use crate::core::error::AppError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, mapping failures to [`AppError::Validation`]
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate a required text field: must not be empty after trimming
pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    ValidationResult::ok()
}

/// Validate every `(field, value)` pair, stopping at the first failure.
/// Returns the trimmed values in the same order.
pub fn require_all<'a>(fields: &[(&str, &'a str)]) -> Result<Vec<&'a str>, AppError> {
    fields
        .iter()
        .map(|(field, value)| {
            validate_required(field, value).into_result()?;
            Ok(value.trim())
        })
        .collect()
}
