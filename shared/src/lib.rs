//! # Shared WhaleWatch Types
//!
//! Data types exchanged between the dashboard core and its boundary ports
//! (balance resolution, notification delivery, chain-event ingestion).
//!
//! ## Structure
//!
//! - **[`dto`]**: Serializable domain types
//!   - **[`dto::wallet`]**: Tracked wallets, networks, resolver snapshots
//!   - **[`dto::activity`]**: Activity feed events
//!   - **[`dto::notification`]**: Notification channel configuration
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten wallet addresses for display
//!   - **[`utils::truncate_address`]**: Shorten with the default 4/4 split
//!
//! ## Wire Format
//!
//! All types serialize to JSON with `serde`:
//! - Field names stay **snake_case**
//! - Network symbols serialize upper-case (`"ETH"`), activity kinds lower-case (`"transfer"`)
//! - Timestamps are RFC 3339 strings (`chrono` with the `serde` feature)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::{NewWallet, Network};
//! use shared::utils::format_address;
//!
//! let candidate = NewWallet {
//!     address: "0x742d35Cc6634C0532925a3b844Bc9e7595f7bF4a".to_string(),
//!     label: "Vitalik.eth".to_string(),
//!     network: Network::Eth,
//!     alerts_enabled: true,
//! };
//!
//! assert_eq!(format_address(&candidate.address, 6, 4), "0x742d...bF4a");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
