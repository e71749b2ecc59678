//! # Logging Infrastructure
//!
//! File-based structured logging for the dashboard.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/whalewatch.log` (daily rotation)
//! - **Panic logging**: Panics are written to the log before the default hook runs
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `whalewatch=info,warn`)
//! - `WHALEWATCH_LOG_DIR`: Log directory (default `logs`)
//! - `WHALEWATCH_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
