//! # Header Bar
//!
//! Title, live UTC clock and the Telegram connection button.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::render_button;
use crate::utils::format::format_utc_clock;

pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🐋 WHALEWATCH")
                .size(22.0)
                .strong()
                .color(theme.accent),
        );
        ui.label(
            egui::RichText::new("REAL-TIME SURVEILLANCE SYSTEM")
                .small()
                .color(theme.dim),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clicked = if state.channel.is_connected() {
                render_button(ui, "Connected", Some("●"), Some(theme.success.gamma_multiply(0.25)))
                    .on_hover_text("Telegram alerts are active")
                    .clicked()
            } else {
                render_button(ui, "Connect Telegram", Some("✈"), Some(theme.highlight.gamma_multiply(0.3)))
                    .clicked()
            };
            if clicked {
                app.handle_open_channel_setup();
            }

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format_utc_clock(state.now))
                    .monospace()
                    .color(theme.normal),
            );
        });
    });
}
