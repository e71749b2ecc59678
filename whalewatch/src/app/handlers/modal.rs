//! # Modal Handlers
//!
//! Opening and closing the add-wallet and channel setup dialogs.

use crate::app::intent::Effect;
use crate::app::state::{AppState, ChannelForm, Modal};

pub(crate) fn open_add_wallet(state: &mut AppState) -> Vec<Effect> {
    state.add_wallet_form.error = None;
    state.modal = Some(Modal::AddWallet);
    Vec::new()
}

/// Opens the channel dialog, prefilled with the current connection if any
pub(crate) fn open_channel_setup(state: &mut AppState) -> Vec<Effect> {
    if let Some(config) = state.channel.config() {
        state.channel_form = ChannelForm {
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            preferences: config.preferences,
            error: None,
        };
    } else {
        state.channel_form.error = None;
    }
    state.modal = Some(Modal::ChannelSetup);
    Vec::new()
}

pub(crate) fn close(state: &mut AppState) -> Vec<Effect> {
    state.modal = None;
    Vec::new()
}

#[cfg(test)]
mod tests {
    use crate::app::intent::Intent;
    use crate::app::state::Modal;
    use crate::app::test_support::Harness;
    use shared::dto::AlertPreferences;

    #[test]
    fn test_open_and_close() {
        let mut harness = Harness::new(false);

        harness.apply(Intent::OpenAddWallet);
        assert_eq!(harness.state.modal, Some(Modal::AddWallet));

        harness.apply(Intent::OpenChannelSetup);
        assert_eq!(harness.state.modal, Some(Modal::ChannelSetup));

        harness.apply(Intent::CloseModal);
        assert_eq!(harness.state.modal, None);
    }

    #[test]
    fn test_reopen_clears_stale_error() {
        let mut harness = Harness::new(false);
        harness.apply(Intent::OpenAddWallet);
        harness.apply(Intent::SubmitAddWallet);
        assert!(harness.state.add_wallet_form.error.is_some());

        harness.apply(Intent::CloseModal);
        harness.apply(Intent::OpenAddWallet);
        assert!(harness.state.add_wallet_form.error.is_none());
    }

    #[test]
    fn test_channel_setup_prefills_from_connection() {
        let mut harness = Harness::new(false);
        let preferences = AlertPreferences {
            swaps: false,
            ..AlertPreferences::default()
        };
        harness
            .state
            .channel
            .connect("123:abc", "-42", preferences)
            .unwrap();

        harness.apply(Intent::OpenChannelSetup);
        assert_eq!(harness.state.channel_form.bot_token, "123:abc");
        assert_eq!(harness.state.channel_form.chat_id, "-42");
        assert!(!harness.state.channel_form.preferences.swaps);
    }
}
