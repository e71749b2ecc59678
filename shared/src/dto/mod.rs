//! # Domain Data Types
//!
//! ## Module Organization
//!
//! - [`wallet`] - Tracked wallets, networks and resolver snapshots
//! - [`activity`] - Activity feed events and their kinds
//! - [`notification`] - Notification channel configuration and alert preferences
//!
//! ## Serialization Format
//!
//! ```text
//! {
//!   "id": "6f1c2f0e-5b8e-4d43-9a55-0f6d0e1f8a11",
//!   "wallet_label": "Vitalik.eth",
//!   "kind": "transfer",
//!   "amount": "500 ETH",
//!   "timestamp": "2026-01-01T12:00:00Z",
//!   "hash": "0x1234...abcd"
//! }
//! ```

pub mod activity;
pub mod notification;
pub mod wallet;

pub use activity::*;
pub use notification::*;
pub use wallet::*;
