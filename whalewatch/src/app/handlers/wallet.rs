//! # Wallet Handlers
//!
//! Adding, removing and toggling alerts on tracked wallets, plus resolver results.

use shared::dto::{NewWallet, WalletId, WalletSnapshot};
use tracing::{debug, warn};

use crate::app::intent::Effect;
use crate::app::state::{AddWalletForm, AppState, NotificationLevel};
use crate::core::error::Result;

fn try_add(state: &mut AppState, candidate: NewWallet) -> Result<Vec<Effect>> {
    let wallet = state.wallets.add(candidate)?;
    let (id, address, network, label) = (
        wallet.id,
        wallet.address.clone(),
        wallet.network,
        wallet.label.clone(),
    );

    state.notify(NotificationLevel::Success, format!("Now tracking {}", label));

    Ok(vec![
        Effect::ResolveWallet {
            id,
            address: address.clone(),
            network,
        },
        Effect::Subscribe { id, address, network },
    ])
}

/// Submit the add-wallet form.
///
/// A rejected submission keeps the dialog open with the message inline;
/// an accepted one closes it and resets the form.
pub(crate) fn submit_add_wallet(state: &mut AppState) -> Vec<Effect> {
    let candidate = state.add_wallet_form.to_new_wallet();
    match try_add(state, candidate) {
        Ok(effects) => {
            state.add_wallet_form = AddWalletForm::default();
            state.modal = None;
            effects
        }
        Err(e) => {
            let message = e.user_message();
            debug!(error = %e, "Add wallet form rejected");
            state.add_wallet_form.error = Some(message.clone());
            state.notify(NotificationLevel::Error, message);
            Vec::new()
        }
    }
}

pub(crate) fn add_wallet(state: &mut AppState, candidate: NewWallet) -> Vec<Effect> {
    try_add(state, candidate).unwrap_or_else(|e| {
        debug!(error = %e, "Wallet rejected");
        state.notify(NotificationLevel::Error, e.user_message());
        Vec::new()
    })
}

pub(crate) fn toggle_alerts(state: &mut AppState, id: WalletId) -> Vec<Effect> {
    state.wallets.toggle_alerts(id);
    Vec::new()
}

pub(crate) fn remove_wallet(state: &mut AppState, id: WalletId) -> Vec<Effect> {
    match state.wallets.remove(id) {
        Some(_) => vec![Effect::Unsubscribe { id }],
        None => Vec::new(),
    }
}

pub(crate) fn wallet_resolved(state: &mut AppState, id: WalletId, snapshot: WalletSnapshot) -> Vec<Effect> {
    if !state.wallets.apply_snapshot(id, snapshot) {
        debug!(wallet_id = %id, "Resolved wallet is no longer tracked");
    }
    Vec::new()
}

pub(crate) fn wallet_resolve_failed(state: &mut AppState, id: WalletId, error: String) -> Vec<Effect> {
    warn!(wallet_id = %id, error = %error, "Failed to resolve wallet state");
    if let Some(wallet) = state.wallets.get(id) {
        let message = format!("Could not load {}: {}", wallet.label, error);
        state.notify(NotificationLevel::Warning, message);
    }
    Vec::new()
}
