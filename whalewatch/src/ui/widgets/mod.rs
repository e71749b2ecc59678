//! # Reusable UI Widgets
//!
//! Common widgets used across the dashboard and its dialogs.

pub mod activity_feed;
pub mod forms;
pub mod header;
pub mod layouts;
pub mod notifications;
pub mod stats_bar;
pub mod wallet_card;
