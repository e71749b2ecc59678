//! # Event Handler
//!
//! Turns [`AppEvent`]s from background tasks into [`Intent`]s.

use crate::app::intent::Intent;
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = ?event, "Handling app event");
        self.dispatch(intent_for(event));
    }
}

pub(crate) fn intent_for(event: AppEvent) -> Intent {
    match event {
        AppEvent::ClockTick => Intent::ClockTick,
        AppEvent::ActivityTick => Intent::GenerateActivity,
        AppEvent::TestHoldElapsed(ticket) => Intent::ExpireTestNotification(ticket),
        AppEvent::WalletResolved { id, result } => match result {
            Ok(snapshot) => Intent::WalletResolved { id, snapshot },
            Err(error) => Intent::WalletResolveFailed { id, error },
        },
        AppEvent::NotificationDelivered(result) => Intent::NotificationResult(result),
        AppEvent::ChainActivity { wallet_id, event } => Intent::RecordActivity { wallet_id, event },
    }
}
