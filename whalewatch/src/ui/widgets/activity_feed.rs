//! # Activity Feed
//!
//! Newest-first list of whale movements. The head row carries a NEW tag.

use chrono::{DateTime, Utc};
use egui;
use shared::dto::ActivityEvent;

use crate::store::ActivityStore;
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts::{render_badge, render_empty_state};
use crate::utils::format::format_relative;

pub fn render_activity_feed(ui: &mut egui::Ui, feed: &ActivityStore, now: DateTime<Utc>, theme: &Theme) {
    if feed.is_empty() {
        render_empty_state(ui, "No activity yet", Some("Movements from tracked wallets show up here"), theme);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("activity_feed")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, event) in feed.iter().enumerate() {
                render_event_row(ui, event, index == 0, now, theme);
                ui.separator();
            }
        });
}

fn render_event_row(ui: &mut egui::Ui, event: &ActivityEvent, is_newest: bool, now: DateTime<Utc>, theme: &Theme) {
    let kind_color = theme.kind_color(event.kind);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(event.kind.icon()).size(18.0).color(kind_color));

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&event.wallet_label).strong());
                ui.label(egui::RichText::new(event.kind.label()).small().color(kind_color));
                if is_newest {
                    render_badge(ui, "NEW", theme.highlight);
                }
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&event.amount).color(theme.accent));
                ui.label(egui::RichText::new(&event.hash).monospace().small().color(theme.dim));
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_relative(event.timestamp, now))
                    .small()
                    .color(theme.dim),
            );
        });
    });
}
