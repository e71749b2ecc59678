//! # Telegram Channel Dialog
//!
//! Connect form while disconnected. Once connected the dialog shows the alert
//! preferences with test and disconnect controls.

use egui;
use shared::dto::AlertPreferences;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_button, render_error, render_form_heading, render_hint, render_text_input};

pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let mut form = state.channel_form.clone();
    let connected = state.channel.is_connected();
    let test_pending = state.channel.test_pending();

    let mut connect = false;
    let mut disconnect = false;
    let mut send_test = false;
    let mut close = false;

    let response = egui::Modal::new(egui::Id::new("channel_setup_modal")).show(ctx, |ui| {
        ui.set_width(400.0);
        render_form_heading(ui, "TELEGRAM ALERTS", theme);

        if connected {
            ui.label(egui::RichText::new("● Connected").strong().color(theme.success));
            if let Some(config) = state.channel.config() {
                ui.label(
                    egui::RichText::new(format!("Chat {}", config.chat_id))
                        .monospace()
                        .color(theme.dim),
                );
            }
            ui.add_space(8.0);
            ui.label(egui::RichText::new("ALERT TYPES").small().color(theme.dim));
            render_preference_summary(ui, &config_preferences(state), theme);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let (label, icon) = if test_pending { ("Sent!", "✓") } else { ("Send Test", "✈") };
                let test_button = ui.add_enabled_ui(!test_pending, |ui| {
                    render_button(ui, label, Some(icon), Some(theme.accent.gamma_multiply(0.3)))
                });
                if test_button.inner.clicked() {
                    send_test = true;
                }
                if render_button(ui, "Disconnect", None, Some(theme.error.gamma_multiply(0.3))).clicked() {
                    disconnect = true;
                }
                if render_button(ui, "Close", None, None).clicked() {
                    close = true;
                }
            });
        } else {
            render_text_input(ui, "Bot Token", &mut form.bot_token, "123456:ABC-DEF...", true, theme);
            ui.add_space(8.0);
            render_text_input(ui, "Chat ID", &mut form.chat_id, "-1001234567890", false, theme);
            render_hint(ui, "Create a bot with @BotFather and add it to your chat", theme);
            ui.add_space(8.0);

            ui.label(egui::RichText::new("ALERT TYPES").small().color(theme.dim));
            edit_preferences(ui, &mut form.preferences);
            ui.add_space(10.0);

            if let Some(error) = &form.error {
                render_error(ui, error, theme);
            }

            ui.horizontal(|ui| {
                if render_button(ui, "Connect", Some("✈"), Some(theme.highlight.gamma_multiply(0.3))).clicked() {
                    connect = true;
                }
                if render_button(ui, "Cancel", None, None).clicked() {
                    close = true;
                }
            });
        }
    });

    if form != state.channel_form {
        app.state.write().channel_form = form;
    }

    if connect {
        app.handle_channel_submit();
    } else if send_test {
        app.handle_send_test_notification();
    } else if disconnect {
        app.handle_disconnect_channel();
    } else if close || response.should_close() {
        app.handle_close_modal();
    }
}

fn config_preferences(state: &AppState) -> AlertPreferences {
    state
        .channel
        .config()
        .map(|config| config.preferences)
        .unwrap_or_default()
}

fn render_preference_summary(ui: &mut egui::Ui, preferences: &AlertPreferences, theme: &Theme) {
    for (label, enabled) in preference_rows(preferences) {
        let (mark, color) = if enabled { ("✓", theme.success) } else { ("✗", theme.dim) };
        ui.label(egui::RichText::new(format!("{} {}", mark, label)).color(color));
    }
}

fn edit_preferences(ui: &mut egui::Ui, preferences: &mut AlertPreferences) {
    ui.checkbox(&mut preferences.large_transfers, "Large transfers");
    ui.checkbox(&mut preferences.swaps, "Swaps");
    ui.checkbox(&mut preferences.nft_activity, "NFT mints");
    ui.checkbox(&mut preferences.staking, "Staking");
}

fn preference_rows(preferences: &AlertPreferences) -> [(&'static str, bool); 4] {
    [
        ("Large transfers", preferences.large_transfers),
        ("Swaps", preferences.swaps),
        ("NFT mints", preferences.nft_activity),
        ("Staking", preferences.staking),
    ]
}
