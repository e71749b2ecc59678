//! # Dashboard Configuration
//!
//! Timer intervals, feed capacity and demo seeding.
//!
//! Values are read from `./whalewatch-config.json` when it exists, then
//! overridden by environment variables:
//!
//! - `WHALEWATCH_CLOCK_INTERVAL_MS` (default 1000)
//! - `WHALEWATCH_ACTIVITY_INTERVAL_MS` (default 15000)
//! - `WHALEWATCH_FEED_CAPACITY` (default 10)
//! - `WHALEWATCH_TEST_NOTIFICATION_MS` (default 3000)
//! - `WHALEWATCH_SEED_DEMO` (`1`/`0`, default on)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Upper bound for every interval and hold (one day)
pub const MAX_INTERVAL_MS: u64 = 86_400_000;

/// Upper bound for the live feed size
pub const MAX_FEED_CAPACITY: usize = 10_000;

/// Default config file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("./whalewatch-config.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header clock refresh interval
    pub clock_interval_ms: u64,
    /// Simulated activity interval
    pub activity_interval_ms: u64,
    /// Maximum number of events kept in the live feed
    pub feed_capacity: usize,
    /// How long the "test notification sent" confirmation stays visible
    pub test_notification_ms: u64,
    /// Start with the demo wallets and events
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1_000,
            activity_interval_ms: 15_000,
            feed_capacity: 10,
            test_notification_ms: 3_000,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load from `path` (defaults when the file is missing), apply env overrides and validate
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("WHALEWATCH_CLOCK_INTERVAL_MS") {
            self.clock_interval_ms = parse_number("WHALEWATCH_CLOCK_INTERVAL_MS", &v)?;
        }
        if let Some(v) = lookup("WHALEWATCH_ACTIVITY_INTERVAL_MS") {
            self.activity_interval_ms = parse_number("WHALEWATCH_ACTIVITY_INTERVAL_MS", &v)?;
        }
        if let Some(v) = lookup("WHALEWATCH_FEED_CAPACITY") {
            self.feed_capacity = parse_number("WHALEWATCH_FEED_CAPACITY", &v)?;
        }
        if let Some(v) = lookup("WHALEWATCH_TEST_NOTIFICATION_MS") {
            self.test_notification_ms = parse_number("WHALEWATCH_TEST_NOTIFICATION_MS", &v)?;
        }
        if let Some(v) = lookup("WHALEWATCH_SEED_DEMO") {
            self.seed_demo_data = v.trim() == "1";
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        check_interval("clock_interval_ms", self.clock_interval_ms, 1)?;
        check_interval("activity_interval_ms", self.activity_interval_ms, 1)?;
        check_interval("test_notification_ms", self.test_notification_ms, 0)?;
        if !(1..=MAX_FEED_CAPACITY).contains(&self.feed_capacity) {
            return Err(AppError::Config(format!(
                "feed_capacity must be between 1 and {}, got {}",
                MAX_FEED_CAPACITY, self.feed_capacity
            )));
        }
        Ok(())
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn activity_interval(&self) -> Duration {
        Duration::from_millis(self.activity_interval_ms)
    }

    pub fn test_notification_hold(&self) -> Duration {
        Duration::from_millis(self.test_notification_ms)
    }
}

fn check_interval(key: &str, value: u64, min: u64) -> Result<()> {
    if (min..=MAX_INTERVAL_MS).contains(&value) {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "{} must be between {} and {} ms, got {}",
            key, min, MAX_INTERVAL_MS, value
        )))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got {:?}", key, value)))
}
