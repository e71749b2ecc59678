//! Notification channel connection state.
//!
//! Nothing here talks to Telegram; connecting only records the bot token,
//! chat id and alert preferences. Delivery goes through
//! [`crate::core::service::NotificationSender`] when one is configured.

use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::dto::{ActivityKind, AlertPreferences, ChannelConfig};
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::utils::validation::require_all;

/// How long the "test sent" confirmation stays visible by default
pub const DEFAULT_TEST_HOLD_MS: u64 = 3_000;

/// Identifies one "test sent" confirmation, so a stale expiry cannot clear a newer one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelState {
    #[default]
    Disconnected,
    Connected(ChannelConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    state: ChannelState,
    test_sent: Option<(TestTicket, DateTime<Utc>)>,
    tickets_issued: u64,
    test_hold: Duration,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TEST_HOLD_MS))
    }
}

impl NotificationChannel {
    pub fn new(test_hold: Duration) -> Self {
        Self {
            state: ChannelState::Disconnected,
            test_sent: None,
            tickets_issued: 0,
            test_hold,
        }
    }

    /// Connect with the given credentials.
    ///
    /// Both values are trimmed and must be non-empty, otherwise the state is
    /// left as it was. Connecting while already connected replaces the config.
    pub fn connect(
        &mut self,
        bot_token: &str,
        chat_id: &str,
        preferences: AlertPreferences,
    ) -> Result<()> {
        let fields = require_all(&[("Bot token", bot_token), ("Chat ID", chat_id)])?;

        let config = ChannelConfig {
            bot_token: fields[0].to_string(),
            chat_id: fields[1].to_string(),
            preferences,
        };
        info!(chat_id = %config.chat_id, "Notification channel connected");

        self.state = ChannelState::Connected(config);
        self.test_sent = None;
        Ok(())
    }

    /// Returns whether the channel was connected before the call
    pub fn disconnect(&mut self) -> bool {
        let was_connected = self.is_connected();
        if was_connected {
            info!("Notification channel disconnected");
        }
        self.state = ChannelState::Disconnected;
        self.test_sent = None;
        was_connected
    }

    /// Start the "test sent" confirmation.
    ///
    /// The returned ticket identifies this confirmation for [`Self::clear_test`].
    pub fn send_test(&mut self, now: DateTime<Utc>) -> Result<TestTicket> {
        if !self.is_connected() {
            return Err(AppError::State(
                "Connect a notification channel before sending a test".to_string(),
            ));
        }
        self.tickets_issued += 1;
        let ticket = TestTicket(self.tickets_issued);
        self.test_sent = Some((ticket, now));
        Ok(ticket)
    }

    /// Clear the confirmation once the hold has elapsed by the wall clock.
    /// Returns true when it was cleared.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        match self.test_sent {
            Some((_, sent)) if (now - sent).to_std().is_ok_and(|age| age >= self.test_hold) => {
                self.test_sent = None;
                true
            }
            _ => false,
        }
    }

    /// Clear the confirmation identified by `ticket` if it is still the current one
    pub fn clear_test(&mut self, ticket: TestTicket) -> bool {
        match self.test_sent {
            Some((current, _)) if current == ticket => {
                self.test_sent = None;
                true
            }
            _ => false,
        }
    }

    pub fn test_pending(&self) -> bool {
        self.test_sent.is_some()
    }

    /// How long the confirmation stays visible
    pub fn test_hold(&self) -> Duration {
        self.test_hold
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ChannelState::Connected(_))
    }

    pub fn state(&self) -> &ChannelState {
        &self.state
    }

    pub fn config(&self) -> Option<&ChannelConfig> {
        match &self.state {
            ChannelState::Connected(config) => Some(config),
            ChannelState::Disconnected => None,
        }
    }

    /// Whether an event of `kind` should be forwarded to the channel
    pub fn should_deliver(&self, kind: ActivityKind) -> bool {
        self.config().is_some_and(|config| config.preferences.allows(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 4, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_connect_then_disconnect() {
        let mut channel = NotificationChannel::default();
        assert!(!channel.is_connected());

        channel.connect(" 123:abc ", "-100", AlertPreferences::default()).unwrap();
        assert_eq!(channel.config().map(|c| c.bot_token.as_str()), Some("123:abc"));
        assert_eq!(channel.config().map(|c| c.chat_id.as_str()), Some("-100"));
        assert!(channel.is_connected());

        assert!(channel.disconnect());
        assert_eq!(channel.state(), &ChannelState::Disconnected);
        assert!(!channel.disconnect());
    }

    #[test]
    fn test_blank_credentials_leave_disconnected() {
        let mut channel = NotificationChannel::default();
        for (token, chat) in [("", "-100"), ("123:abc", "  "), (" ", "")] {
            let err = channel.connect(token, chat, AlertPreferences::default()).unwrap_err();
            assert!(err.is_validation());
            assert!(!channel.is_connected());
        }
    }

    #[test]
    fn test_blank_credentials_keep_existing_connection() {
        let mut channel = NotificationChannel::default();
        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        assert!(channel.connect("", "", AlertPreferences::default()).is_err());
        assert_eq!(channel.config().map(|c| c.bot_token.as_str()), Some("t"));
    }

    #[test]
    fn test_send_test_requires_connection() {
        let mut channel = NotificationChannel::default();
        assert!(matches!(channel.send_test(now()), Err(AppError::State(_))));
        assert!(!channel.test_pending());
    }

    #[test]
    fn test_confirmation_expires_after_hold() {
        let mut channel = NotificationChannel::default();
        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        channel.send_test(now()).unwrap();
        assert!(channel.test_pending());

        assert!(!channel.expire(now() + TimeDelta::milliseconds(2_999)));
        assert!(channel.test_pending());

        assert!(channel.expire(now() + TimeDelta::milliseconds(3_000)));
        assert!(!channel.test_pending());
    }

    #[test]
    fn test_clock_behind_send_time_does_not_expire() {
        let mut channel = NotificationChannel::default();
        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        channel.send_test(now()).unwrap();

        assert!(!channel.expire(now() - TimeDelta::seconds(10)));
        assert!(channel.test_pending());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_confirmation() {
        let mut channel = NotificationChannel::default();
        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        let first = channel.send_test(now()).unwrap();
        let second = channel.send_test(now() + TimeDelta::seconds(1)).unwrap();
        assert_ne!(first, second);

        assert!(!channel.clear_test(first));
        assert!(channel.test_pending());

        assert!(channel.clear_test(second));
        assert!(!channel.test_pending());
        assert!(!channel.clear_test(second));
    }

    #[test]
    fn test_disconnect_clears_confirmation() {
        let mut channel = NotificationChannel::default();
        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        channel.send_test(now()).unwrap();
        channel.disconnect();
        assert!(!channel.test_pending());
    }

    #[test]
    fn test_should_deliver_follows_preferences() {
        let mut channel = NotificationChannel::default();
        assert!(!channel.should_deliver(ActivityKind::Transfer));

        channel.connect("t", "c", AlertPreferences::default()).unwrap();
        assert!(channel.should_deliver(ActivityKind::Transfer));
        assert!(channel.should_deliver(ActivityKind::Swap));
        assert!(!channel.should_deliver(ActivityKind::Mint));
        assert!(channel.should_deliver(ActivityKind::Stake));
    }
}
