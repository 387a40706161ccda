//! Theme structure and application
//!
//! Semantic color system. Colors are organized by purpose, not by color name.

use ratatui::style::Color;
use tracing::warn;

/// Theme colors with semantic organization
#[derive(Clone, Debug)]
pub struct Theme {
    // ─────────────────────────────────────────────────────────────────────────
    // Surfaces
    // ─────────────────────────────────────────────────────────────────────────
    /// Main background color
    pub background: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────
    /// Primary text - headers, prices, important content
    pub text_primary: Color,
    /// Secondary text - descriptions, labels
    pub text_secondary: Color,
    /// Muted text - hints, timestamps, column headers
    pub text_muted: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Accents
    // ─────────────────────────────────────────────────────────────────────────
    /// Primary accent - brand color
    pub accent: Color,
    /// Secondary accent - chart series, source tags
    pub accent_secondary: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Semantic
    // ─────────────────────────────────────────────────────────────────────────
    /// Gains, healthy states
    pub success: Color,
    /// Caution, attention needed
    pub warning: Color,
    /// Losses, triggered alerts
    pub error: Color,
    /// Informational, neutral
    pub info: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Borders
    // ─────────────────────────────────────────────────────────────────────────
    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::blockvista_dark()
    }
}

impl Theme {
    /// BlockVista Dark - the default theme
    pub fn blockvista_dark() -> Self {
        Self {
            background: Color::Rgb(20, 24, 31),          // #14181f - Ink

            text_primary: Color::Rgb(236, 239, 244),     // #eceff4 - Off-white
            text_secondary: Color::Rgb(176, 184, 196),   // Muted
            text_muted: Color::Rgb(118, 128, 143),       // #76808f - Very muted

            accent: Color::Rgb(255, 75, 75),             // #ff4b4b - BlockVista red
            accent_secondary: Color::Rgb(55, 118, 171),  // #3776ab - Steel blue

            success: Color::Rgb(139, 213, 162),          // #8bd5a2 - Soft green
            warning: Color::Rgb(249, 226, 175),          // #f9e2af - Warm yellow
            error: Color::Rgb(255, 107, 107),            // #ff6b6b - Soft red
            info: Color::Rgb(137, 180, 250),             // #89b4fa - Soft blue

            border: Color::Rgb(52, 60, 72),              // #343c48 - Slate
            border_focused: Color::Rgb(255, 75, 75),
        }
    }

    /// Default theme with the accent override from `BLOCKVISTA_ACCENT` applied
    pub fn load() -> Self {
        let theme = Self::default();
        match crate::config::accent_hex() {
            Some(hex) => theme.with_accent_hex(&hex),
            None => theme,
        }
    }

    /// Replace the accent colors with `hex`, keeping the theme unchanged if it doesn't parse
    pub fn with_accent_hex(mut self, hex: &str) -> Self {
        match Self::hex_to_color(hex) {
            Some(color) => {
                self.accent = color;
                self.border_focused = color;
            }
            None => warn!("Ignoring invalid accent color {:?}", hex),
        }
        self
    }

    /// Convert hex string to Color
    pub fn hex_to_color(hex: &str) -> Option<Color> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }

    /// Color for a signed change: gains green, losses red
    pub fn change_color(&self, change: f64) -> Color {
        if change >= 0.0 {
            self.success
        } else {
            self.error
        }
    }

    /// Get status indicator color
    pub fn status_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "live" | "connected" | "ok" => self.success,
            "warning" | "stale" => self.warning,
            "triggered" | "error" | "critical" => self.error,
            "armed" | "info" | "pending" => self.info,
            _ => self.text_muted,
        }
    }
}
