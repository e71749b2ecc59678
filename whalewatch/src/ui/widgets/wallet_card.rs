//! # Wallet Card
//!
//! One tracked wallet: label, network and status badges, truncated address,
//! balance, last activity and the alert/remove controls.

use egui;
use shared::dto::Wallet;
use shared::utils::truncate_address;

use crate::ui::theme::Theme;
use crate::ui::widgets::layouts::{render_badge, render_card};

/// Control clicked on a card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ToggleAlerts,
    Remove,
}

/// Render a wallet card and report which control, if any, was clicked
pub fn render_wallet_card(ui: &mut egui::Ui, wallet: &Wallet, theme: &Theme) -> Option<CardAction> {
    let mut action = None;

    render_card(ui, theme, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&wallet.label).strong().size(16.0));
            render_badge(ui, wallet.network.symbol(), theme.network_color(wallet.network));
            if wallet.is_active {
                render_badge(ui, "ACTIVE", theme.success);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("🗑").color(theme.error))
                    .on_hover_text("Stop tracking")
                    .clicked()
                {
                    action = Some(CardAction::Remove);
                }

                let (bell, color, hover) = if wallet.alerts_enabled {
                    ("🔔", theme.highlight, "Alerts on")
                } else {
                    ("🔕", theme.dim, "Alerts off")
                };
                if ui
                    .button(egui::RichText::new(bell).color(color))
                    .on_hover_text(hover)
                    .clicked()
                {
                    action = Some(CardAction::ToggleAlerts);
                }
            });
        });

        ui.label(
            egui::RichText::new(truncate_address(&wallet.address))
                .monospace()
                .color(theme.dim),
        )
        .on_hover_text(&wallet.address);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("BALANCE").small().color(theme.dim));
                ui.label(egui::RichText::new(&wallet.balance).strong().color(theme.accent));
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("LAST ACTIVITY").small().color(theme.dim));
                ui.label(&wallet.last_activity);
            });
        });
    });

    action
}
