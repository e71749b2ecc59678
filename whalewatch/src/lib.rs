//! # WhaleWatch - Library Root
//!
//! A **native desktop dashboard** for watching large crypto wallets.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Wallet Tracking**: Add, remove and mute ETH / SOL / BTC wallets
//! - **Live Activity Feed**: Bounded newest-first feed of whale movements
//! - **Telegram Alerts**: Channel setup with per-kind alert preferences
//! - **Live Clock**: UTC header clock refreshed every second
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              whalewatch (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Timers and port tasks                 │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ optional ports (core::service)
//!          ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  WalletStateResolver · NotificationSender · ChainSource  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! With no ports configured the feed is driven by a simulated generator and
//! newly tracked wallets keep their placeholder balance.
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, reducer, intents, events and background tasks
//! - **store**: Wallet list, activity feed, notification channel, generator
//! - **core**: Errors, port traits, clock
//! - **config**: Intervals, feed capacity, demo seeding
//! - **debug**: Logging setup
//! - **ui**: Screens, widgets, theme
//! - **utils**: Validation and display formatting
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, intents, events, tasks)
//!   │   ├── store (wallets, activity, channel, generator)
//!   │   └── core::service (ports)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (dashboard, add_wallet, channel_setup)
//!       ├── widgets::* (header, stats bar, cards, feed)
//!       └── theme
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin whalewatch
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p whalewatch
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Intent};
pub use config::AppConfig;
pub use core::{AppError, Result};
