//! # Add Wallet Dialog
//!
//! Modal form for tracking a new wallet. The form lives in app state so a
//! failed submit keeps what the user typed.

use egui;
use shared::dto::Network;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_button, render_error, render_form_heading, render_hint, render_text_input};

pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let mut form = state.add_wallet_form.clone();
    let mut submit = false;
    let mut cancel = false;

    let response = egui::Modal::new(egui::Id::new("add_wallet_modal")).show(ctx, |ui| {
        ui.set_width(380.0);
        render_form_heading(ui, "TRACK NEW WALLET", theme);

        ui.label(egui::RichText::new("Network").small().color(theme.dim));
        egui::ComboBox::from_id_salt("add_wallet_network")
            .selected_text(form.network.symbol())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for network in Network::all() {
                    ui.selectable_value(&mut form.network, *network, network.symbol());
                }
            });
        ui.add_space(8.0);

        render_text_input(ui, "Wallet Address", &mut form.address, "0x... / bc1... / base58", false, theme);
        ui.add_space(8.0);
        let label_response = render_text_input(ui, "Label", &mut form.label, "e.g. Vitalik.eth", false, theme);
        if label_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        ui.add_space(8.0);

        ui.checkbox(&mut form.alerts_enabled, "Enable alerts for this wallet");
        render_hint(ui, "Alerts are forwarded when a Telegram channel is connected", theme);
        ui.add_space(10.0);

        if let Some(error) = &form.error {
            render_error(ui, error, theme);
        }

        ui.horizontal(|ui| {
            if render_button(ui, "Track Wallet", Some("+"), Some(theme.accent.gamma_multiply(0.3))).clicked() {
                submit = true;
            }
            if render_button(ui, "Cancel", None, None).clicked() {
                cancel = true;
            }
        });
    });

    if form != state.add_wallet_form {
        app.state.write().add_wallet_form = form;
    }

    if submit {
        app.handle_add_wallet_submit();
    } else if cancel || response.should_close() {
        app.handle_close_modal();
    }
}
