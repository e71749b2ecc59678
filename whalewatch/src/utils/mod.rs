//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Required-field validation for the dashboard forms
//! - **[`format`]**: Relative timestamps and the header clock
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Address shortening
//! - [`crate::core`]: Error types

pub mod format;
pub mod validation;
