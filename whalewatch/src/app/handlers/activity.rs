//! # Activity Handlers
//!
//! Clock and activity ticks, chain-reported events and alert dispatch.

use shared::dto::{ActivityEvent, WalletId};
use tracing::{debug, trace};

use crate::app::intent::{Effect, Env};
use crate::app::state::AppState;
use crate::store::ActivityGenerator;

pub(crate) fn clock_tick(state: &mut AppState, env: &mut Env<'_>) -> Vec<Effect> {
    state.now = env.clock.now();
    if state.channel.expire(state.now) {
        trace!("Test notification confirmation cleared");
    }
    Vec::new()
}

pub(crate) fn generate(state: &mut AppState, env: &mut Env<'_>) -> Vec<Effect> {
    let generated = ActivityGenerator::new().tick(
        &state.wallets,
        &mut state.activity,
        &mut *env.rng,
        env.clock,
    );

    match generated {
        Some((wallet_id, event)) => alert_for(state, wallet_id, event),
        None => Vec::new(),
    }
}

/// Events for wallets that are no longer tracked are dropped
pub(crate) fn record(state: &mut AppState, wallet_id: WalletId, event: ActivityEvent) -> Vec<Effect> {
    if state.wallets.get(wallet_id).is_none() {
        debug!(wallet_id = %wallet_id, "Dropping activity for untracked wallet");
        return Vec::new();
    }
    state.activity.prepend(event.clone());
    alert_for(state, wallet_id, event)
}

/// Deliver when the wallet has alerts on and the channel wants this kind
fn alert_for(state: &AppState, wallet_id: WalletId, event: ActivityEvent) -> Vec<Effect> {
    let alerts_enabled = state
        .wallets
        .get(wallet_id)
        .is_some_and(|wallet| wallet.alerts_enabled);

    if !alerts_enabled || !state.channel.should_deliver(event.kind) {
        return Vec::new();
    }

    match state.channel.config() {
        Some(config) => vec![Effect::Deliver {
            config: config.clone(),
            event,
        }],
        None => Vec::new(),
    }
}
