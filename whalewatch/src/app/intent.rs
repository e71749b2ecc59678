//! # Intents and Effects
//!
//! Every user action and timer tick reaches [`AppState`](super::state::AppState)
//! as an [`Intent`]. Applying an intent may request work from the optional
//! ports; those requests come back as [`Effect`]s for the [`App`](super::App)
//! to run.

use std::time::Duration;

use rand::RngCore;
use shared::dto::{ActivityEvent, ChannelConfig, NewWallet, Network, WalletId, WalletSnapshot};

use crate::core::clock::Clock;
use crate::store::TestTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Show the add-wallet dialog
    OpenAddWallet,
    /// Show the notification channel dialog
    OpenChannelSetup,
    /// Dismiss whichever dialog is open
    CloseModal,
    /// Submit the add-wallet form as currently filled in
    SubmitAddWallet,
    /// Track a wallet directly, bypassing the form
    AddWallet(NewWallet),
    ToggleAlerts(WalletId),
    RemoveWallet(WalletId),
    /// Submit the channel form as currently filled in
    SubmitChannelSetup,
    DisconnectChannel,
    SendTestNotification,
    /// Hold for a test confirmation elapsed
    ExpireTestNotification(TestTicket),
    /// Header clock refresh
    ClockTick,
    /// Simulated activity tick
    GenerateActivity,
    /// Activity reported by a chain event source
    RecordActivity {
        wallet_id: WalletId,
        event: ActivityEvent,
    },
    WalletResolved {
        id: WalletId,
        snapshot: WalletSnapshot,
    },
    WalletResolveFailed {
        id: WalletId,
        error: String,
    },
    /// Outcome of a notification delivery
    NotificationResult(Result<(), String>),
}

/// Work requested from a port
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveWallet {
        id: WalletId,
        address: String,
        network: Network,
    },
    Deliver {
        config: ChannelConfig,
        event: ActivityEvent,
    },
    Subscribe {
        id: WalletId,
        address: String,
        network: Network,
    },
    Unsubscribe {
        id: WalletId,
    },
    /// Clear the test confirmation `ticket` after `after`
    ScheduleTestExpiry {
        ticket: TestTicket,
        after: Duration,
    },
    /// Drop any pending test confirmation timer
    CancelTestExpiry,
}

/// Randomness and time available while applying an intent
pub struct Env<'a> {
    pub rng: &'a mut dyn RngCore,
    pub clock: &'a dyn Clock,
}

impl<'a> Env<'a> {
    pub fn new(rng: &'a mut dyn RngCore, clock: &'a dyn Clock) -> Self {
        Self { rng, clock }
    }
}
