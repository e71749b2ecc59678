//! # Form Components
//!
//! Reusable form elements for the dashboard dialogs

use egui;
use crate::ui::theme::Theme;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    theme: &Theme,
) -> egui::Response {
    ui.label(egui::RichText::new(label).small().color(theme.dim));
    ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let mut button = egui::Button::new(egui::RichText::new(button_text).strong());
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    ui.add(button)
}

/// Render a dialog heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .size(18.0)
            .strong()
            .color(theme.accent),
    );
    ui.add_space(12.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(format!("⚠ {}", error)).color(theme.error));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).small().color(theme.dim));
}
