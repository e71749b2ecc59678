//! # GUI Theme
//!
//! Dark surveillance theme: near-black panels, cyan primary accent and orange
//! secondary accent. Networks and activity kinds get fixed colours so they
//! read the same everywhere.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::dto::{ActivityKind, Network};

/// Colour palette
#[derive(Debug, Clone)]
pub struct WhaleColors {
    /// Window background
    pub background: Color32,
    /// Card / panel fill
    pub panel: Color32,
    /// Raised card fill on hover
    pub panel_hover: Color32,
    pub text: Color32,
    /// Secondary text
    pub text_dim: Color32,
    pub border: Color32,
    /// Cyan primary accent
    pub cyan: Color32,
    /// Orange secondary accent
    pub orange: Color32,
    pub green: Color32,
    pub red: Color32,
    pub yellow: Color32,
}

impl Default for WhaleColors {
    fn default() -> Self {
        WhaleColors {
            background: Color32::from_rgb(10, 10, 15),   // #0A0A0F
            panel: Color32::from_rgb(17, 17, 24),        // #111118
            panel_hover: Color32::from_rgb(24, 24, 33),  // #181821
            text: Color32::from_rgb(226, 232, 240),      // #E2E8F0
            text_dim: Color32::from_rgb(100, 116, 139),  // #64748B
            border: Color32::from_rgb(34, 211, 238).gamma_multiply(0.2),
            cyan: Color32::from_rgb(34, 211, 238),       // #22D3EE
            orange: Color32::from_rgb(249, 115, 22),     // #F97316
            green: Color32::from_rgb(74, 222, 128),      // #4ADE80
            red: Color32::from_rgb(248, 113, 113),       // #F87171
            yellow: Color32::from_rgb(250, 204, 21),     // #FACC15
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: WhaleColors,
    pub normal: Color32,
    /// Primary accent (headings, selected)
    pub accent: Color32,
    /// Secondary accent (alerts, NEW tag)
    pub highlight: Color32,
    pub dim: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub panel: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = WhaleColors::default();
        Theme {
            normal: colors.text,
            accent: colors.cyan,
            highlight: colors.orange,
            dim: colors.text_dim,
            border: colors.border,
            success: colors.green,
            error: colors.red,
            warning: colors.yellow,
            panel: colors.panel,
            background: colors.background,
            colors,
        }
    }
}

impl Theme {
    /// Badge colour for a network
    pub fn network_color(&self, network: Network) -> Color32 {
        match network {
            Network::Eth => Color32::from_rgb(0x62, 0x7E, 0xEA),
            Network::Sol => Color32::from_rgb(0x99, 0x45, 0xFF),
            Network::Btc => Color32::from_rgb(0xF7, 0x93, 0x1A),
        }
    }

    /// Icon colour for an activity kind
    pub fn kind_color(&self, kind: ActivityKind) -> Color32 {
        match kind {
            ActivityKind::Transfer => Color32::from_rgb(0x22, 0xD3, 0xEE),
            ActivityKind::Swap => Color32::from_rgb(0xA8, 0x55, 0xF7),
            ActivityKind::Mint => Color32::from_rgb(0x4A, 0xDE, 0x80),
            ActivityKind::Stake => Color32::from_rgb(0xF9, 0x73, 0x16),
        }
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.cyan.gamma_multiply(0.4));
        visuals.faint_bg_color = colors.panel;
        visuals.extreme_bg_color = colors.background;

        visuals.widgets.noninteractive.bg_fill = colors.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.inactive.bg_fill = colors.panel_hover;
        visuals.widgets.inactive.weak_bg_fill = colors.panel_hover;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        // Hover and press glow cyan
        visuals.widgets.hovered.bg_fill = colors.cyan.gamma_multiply(0.15);
        visuals.widgets.hovered.weak_bg_fill = colors.cyan.gamma_multiply(0.15);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.cyan);
        visuals.widgets.active.bg_fill = colors.cyan.gamma_multiply(0.3);
        visuals.widgets.active.weak_bg_fill = colors.cyan.gamma_multiply(0.3);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.cyan);

        visuals.selection.bg_fill = colors.cyan.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, colors.cyan);
        visuals.hyperlink_color = colors.cyan;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.window_margin = egui::Margin::same(16);
            });
        }
        ctx.set_theme(EguiTheme::Dark);

        tracing::debug!("Applied dashboard theme");
    }
}
