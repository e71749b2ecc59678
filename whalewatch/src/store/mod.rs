//! # Stores
//!
//! In-memory domain state owned by [`crate::app::state::AppState`]:
//!
//! - **[`wallet`]**: tracked wallets
//! - **[`activity`]**: bounded live feed
//! - **[`generator`]**: synthetic activity
//! - **[`channel`]**: notification channel connection

pub mod activity;
pub mod channel;
pub mod generator;
pub mod wallet;

pub use activity::{ActivityStore, DEFAULT_FEED_CAPACITY};
pub use channel::{ChannelState, NotificationChannel, TestTicket};
pub use generator::{ActivityGenerator, SAMPLE_AMOUNTS};
pub use wallet::WalletStore;
