//! # Notification Handlers
//!
//! Channel connect/disconnect, the test notification and delivery results.

use tracing::{debug, trace, warn};

use crate::app::intent::{Effect, Env};
use crate::app::state::{AppState, NotificationLevel};
use crate::store::TestTicket;

/// Submit the channel form. A successful connect closes the dialog.
pub(crate) fn submit_channel_setup(state: &mut AppState) -> Vec<Effect> {
    let form = state.channel_form.clone();
    match state
        .channel
        .connect(&form.bot_token, &form.chat_id, form.preferences)
    {
        Ok(()) => {
            state.channel_form.error = None;
            state.modal = None;
            state.notify(NotificationLevel::Success, "Telegram connected");
        }
        Err(e) => {
            let message = e.user_message();
            state.channel_form.error = Some(message.clone());
            state.notify(NotificationLevel::Error, message);
        }
    }
    Vec::new()
}

pub(crate) fn disconnect(state: &mut AppState) -> Vec<Effect> {
    if !state.channel.disconnect() {
        return Vec::new();
    }
    state.channel_form = Default::default();
    state.notify(NotificationLevel::Info, "Telegram disconnected");
    vec![Effect::CancelTestExpiry]
}

/// Shows the confirmation and schedules its expiry; nothing is delivered
pub(crate) fn send_test(state: &mut AppState, env: &mut Env<'_>) -> Vec<Effect> {
    match state.channel.send_test(env.clock.now()) {
        Ok(ticket) => {
            state.notify(NotificationLevel::Success, "Test notification sent");
            vec![Effect::ScheduleTestExpiry {
                ticket,
                after: state.channel.test_hold(),
            }]
        }
        Err(e) => {
            state.notify(NotificationLevel::Warning, e.user_message());
            Vec::new()
        }
    }
}

pub(crate) fn expire_test(state: &mut AppState, ticket: TestTicket) -> Vec<Effect> {
    if state.channel.clear_test(ticket) {
        trace!(ticket = ?ticket, "Test notification confirmation cleared");
    }
    Vec::new()
}

pub(crate) fn delivery_result(state: &mut AppState, result: Result<(), String>) -> Vec<Effect> {
    match result {
        Ok(()) => debug!("Notification delivered"),
        Err(error) => {
            warn!(error = %error, "Notification delivery failed");
            state.notify(NotificationLevel::Error, format!("Notification failed: {}", error));
        }
    }
    Vec::new()
}
