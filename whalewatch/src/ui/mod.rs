//! # GUI Rendering Framework
//!
//! This module orchestrates the dashboard rendering pipeline using **egui widgets**.
//!
//! Each frame:
//! 1. [`App::on_tick`] drains background events into the reducer
//! 2. Queued notifications become toasts
//! 3. A state snapshot is cloned and rendered without holding the lock
//! 4. A repaint is scheduled so the clock and feed keep moving without input

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;

use crate::app::{App, Modal};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Upper bound between repaints while idle
const MAX_REPAINT_INTERVAL: Duration = Duration::from_millis(500);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Read state for rendering
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme.panel)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            widgets::header::render_header(ui, &state, app, theme);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(4.0);
        widgets::stats_bar::render_stats_bar(ui, &state, theme);
        ui.add_space(12.0);
        screens::dashboard::render(ui, &state, app, theme);
    });

    match state.modal {
        Some(Modal::AddWallet) => screens::add_wallet::render(ctx, &state, app, theme),
        Some(Modal::ChannelSetup) => screens::channel_setup::render(ctx, &state, app, theme),
        None => {}
    }
}

/// eframe window hosting the dashboard
pub struct DashboardWindow {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl DashboardWindow {
    pub fn new(app: App, theme: Theme) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }

    fn repaint_interval(&self) -> Duration {
        self.app.config().clock_interval().min(MAX_REPAINT_INTERVAL)
    }
}

impl eframe::App for DashboardWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for notification in self.app.take_notifications() {
            self.notifications.push(notification);
        }

        render(ctx, &mut self.app, &self.theme);
        self.notifications.show(ctx);

        ctx.request_repaint_after(self.repaint_interval());
    }
}
