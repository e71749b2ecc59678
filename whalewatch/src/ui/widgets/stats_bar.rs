//! # Stats Bar
//!
//! Summary counters across the top of the dashboard.

use chrono::Duration;
use egui;

use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts::render_card;

/// Counters shown in the stats bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub tracked: usize,
    pub active: usize,
    pub alerts_on: usize,
    /// Events currently held in the feed
    pub events: usize,
    /// Feed events from the last 24 hours
    pub last_24h: usize,
}

impl DashboardStats {
    pub fn collect(state: &AppState) -> Self {
        let cutoff = state.now - Duration::hours(24);
        Self {
            tracked: state.wallets.len(),
            active: state.wallets.active_count(),
            alerts_on: state.wallets.alerts_enabled_count(),
            events: state.activity.len(),
            last_24h: state.activity.count_since(cutoff),
        }
    }

    fn entries(&self) -> [(&'static str, usize); 5] {
        [
            ("TRACKED", self.tracked),
            ("ACTIVE", self.active),
            ("ALERTS ON", self.alerts_on),
            ("EVENTS", self.events),
            ("24H", self.last_24h),
        ]
    }
}

pub fn render_stats_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let stats = DashboardStats::collect(state);

    ui.columns(5, |columns| {
        for (column, (label, value)) in columns.iter_mut().zip(stats.entries()) {
            render_card(column, theme, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(label).small().color(theme.dim));
                ui.label(
                    egui::RichText::new(value.to_string())
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;

    #[test]
    fn test_seeded_stats() {
        let harness = Harness::new(true);
        let stats = DashboardStats::collect(&harness.state);

        assert_eq!(stats.tracked, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.alerts_on, 2);
        assert_eq!(stats.events, 4);
        assert_eq!(stats.last_24h, 4);
    }

    #[test]
    fn test_empty_stats() {
        let harness = Harness::new(false);
        let stats = DashboardStats::collect(&harness.state);

        assert_eq!(stats, DashboardStats { tracked: 0, active: 0, alerts_on: 0, events: 0, last_24h: 0 });
    }

    #[test]
    fn test_old_events_fall_out_of_24h_window() {
        let mut harness = Harness::new(true);
        harness.state.now = harness.state.now + Duration::hours(25);

        let stats = DashboardStats::collect(&harness.state);
        assert_eq!(stats.events, 4);
        assert_eq!(stats.last_24h, 0);
    }
}
