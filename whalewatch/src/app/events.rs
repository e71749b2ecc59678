//! # Application Events
//!
//! Messages sent from background tasks to the UI thread.

use shared::dto::{ActivityEvent, WalletId, WalletSnapshot};

use crate::store::TestTicket;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Header clock interval elapsed
    ClockTick,
    /// Simulated activity interval elapsed
    ActivityTick,
    /// Test notification confirmation hold elapsed
    TestHoldElapsed(TestTicket),
    /// Balance resolver finished
    WalletResolved {
        id: WalletId,
        result: Result<WalletSnapshot, String>,
    },
    /// Notification sender finished
    NotificationDelivered(Result<(), String>),
    /// Chain event source produced an event
    ChainActivity {
        wallet_id: WalletId,
        event: ActivityEvent,
    },
}
