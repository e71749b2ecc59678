//! # Application State Types
//!
//! The dashboard state and the form/dialog types that live in it. All
//! mutation goes through [`AppState::apply`].

use chrono::{DateTime, Utc};
use shared::dto::{AlertPreferences, NewWallet, Network};

use super::handlers;
use super::intent::{Effect, Env, Intent};
use crate::config::AppConfig;
use crate::store::{ActivityStore, NotificationChannel, WalletStore};

/// Open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddWallet,
    ChannelSetup,
}

/// Fields of the add-wallet dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWalletForm {
    pub network: Network,
    pub address: String,
    pub label: String,
    pub alerts_enabled: bool,
    /// Last rejection message, shown under the fields
    pub error: Option<String>,
}

impl Default for AddWalletForm {
    fn default() -> Self {
        Self {
            network: Network::Eth,
            address: String::new(),
            label: String::new(),
            alerts_enabled: true,
            error: None,
        }
    }
}

impl AddWalletForm {
    pub fn to_new_wallet(&self) -> NewWallet {
        NewWallet {
            address: self.address.clone(),
            label: self.label.clone(),
            network: self.network,
            alerts_enabled: self.alerts_enabled,
        }
    }
}

/// Fields of the notification channel dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelForm {
    pub bot_token: String,
    pub chat_id: String,
    pub preferences: AlertPreferences,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Toast waiting to be shown by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub wallets: WalletStore,
    pub activity: ActivityStore,
    pub channel: NotificationChannel,
    pub modal: Option<Modal>,
    pub add_wallet_form: AddWalletForm,
    pub channel_form: ChannelForm,
    /// Time shown in the header, refreshed on each clock tick
    pub now: DateTime<Utc>,
    /// Toasts queued for the next frame
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(config: &AppConfig, now: DateTime<Utc>) -> Self {
        let (wallets, activity) = if config.seed_demo_data {
            (
                WalletStore::seeded(),
                ActivityStore::seeded(now, config.feed_capacity),
            )
        } else {
            (
                WalletStore::new(),
                ActivityStore::with_capacity(config.feed_capacity),
            )
        };

        Self {
            wallets,
            activity,
            channel: NotificationChannel::new(config.test_notification_hold()),
            modal: None,
            add_wallet_form: AddWalletForm::default(),
            channel_form: ChannelForm::default(),
            now,
            pending_notifications: Vec::new(),
        }
    }

    /// Apply one intent and return the port work it requires
    pub fn apply(&mut self, intent: Intent, env: &mut Env<'_>) -> Vec<Effect> {
        match intent {
            Intent::OpenAddWallet => handlers::modal::open_add_wallet(self),
            Intent::OpenChannelSetup => handlers::modal::open_channel_setup(self),
            Intent::CloseModal => handlers::modal::close(self),
            Intent::SubmitAddWallet => handlers::wallet::submit_add_wallet(self),
            Intent::AddWallet(candidate) => handlers::wallet::add_wallet(self, candidate),
            Intent::ToggleAlerts(id) => handlers::wallet::toggle_alerts(self, id),
            Intent::RemoveWallet(id) => handlers::wallet::remove_wallet(self, id),
            Intent::WalletResolved { id, snapshot } => {
                handlers::wallet::wallet_resolved(self, id, snapshot)
            }
            Intent::WalletResolveFailed { id, error } => {
                handlers::wallet::wallet_resolve_failed(self, id, error)
            }
            Intent::SubmitChannelSetup => handlers::notification::submit_channel_setup(self),
            Intent::DisconnectChannel => handlers::notification::disconnect(self),
            Intent::SendTestNotification => handlers::notification::send_test(self, env),
            Intent::ExpireTestNotification(ticket) => {
                handlers::notification::expire_test(self, ticket)
            }
            Intent::NotificationResult(result) => {
                handlers::notification::delivery_result(self, result)
            }
            Intent::ClockTick => handlers::activity::clock_tick(self, env),
            Intent::GenerateActivity => handlers::activity::generate(self, env),
            Intent::RecordActivity { wallet_id, event } => {
                handlers::activity::record(self, wallet_id, event)
            }
        }
    }

    pub(crate) fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    /// Hand queued toasts to the UI
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending_notifications)
    }
}
