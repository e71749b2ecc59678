//! # Dashboard Screen
//!
//! Wallet grid on the left, live activity feed on the right.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::activity_feed::render_activity_feed;
use crate::ui::widgets::forms::render_button;
use crate::ui::widgets::layouts::{render_empty_state, render_section_title};
use crate::ui::widgets::wallet_card::{render_wallet_card, CardAction};

/// Render the main dashboard body
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.columns(2, |columns| {
        render_wallets(&mut columns[0], state, app, theme);
        render_feed(&mut columns[1], state, theme);
    });
}

fn render_wallets(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    render_section_title(ui, "TRACKED WALLETS", theme, |ui| {
        if render_button(ui, "Add Wallet", Some("+"), Some(theme.accent.gamma_multiply(0.3))).clicked() {
            app.handle_open_add_wallet();
        }
    });

    if state.wallets.is_empty() {
        render_empty_state(ui, "No wallets tracked", Some("Add a wallet to start watching it"), theme);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("wallet_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for wallet in state.wallets.list() {
                match render_wallet_card(ui, wallet, theme) {
                    Some(CardAction::ToggleAlerts) => app.handle_toggle_alerts(wallet.id),
                    Some(CardAction::Remove) => app.handle_remove_wallet(wallet.id),
                    None => {}
                }
                ui.add_space(8.0);
            }
        });
}

fn render_feed(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    render_section_title(ui, "LIVE ACTIVITY", theme, |ui| {
        ui.label(egui::RichText::new("● LIVE").small().color(theme.success));
    });
    render_activity_feed(ui, &state.activity, state.now, theme);
}
