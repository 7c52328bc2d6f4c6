//! # Theme System
//!
//! Provides a centralized color theme system for the portfolio page.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Instead of
//! hardcoding `ratatui::style::Color` values, rendering code references theme
//! fields. Themes come in dark/light pairs; the navbar toggle swaps the active
//! theme for its counterpart.
//!
//! ## Built-in Themes
//!
//! - **Violet Night** (default) - the site's dark violet palette
//! - **Violet Day** - the light variant of the same palette
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme

use ratatui::style::Color;

/// All colors used by the page, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also used in the config file.
    pub name: &'static str,
    /// Whether this is the dark member of its pair.
    pub dark: bool,
    /// Name of the theme the dark/light toggle switches to.
    pub counterpart: &'static str,

    // -- Background colors --
    /// Page background.
    pub bg: Color,
    /// Card, overlay and input background.
    pub card: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (labels, hints, footer).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Brand violet: headings, focused borders, active indicators.
    pub accent: Color,
    /// Lighter accent for highlights and the typewriter cursor.
    pub secondary: Color,
    /// Resting borders and inactive indicators.
    pub border: Color,

    // -- Semantic status colors --
    /// Success status in the contact form.
    pub success: Color,
    /// Error status in the contact form.
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Violet Night).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The other member of this theme's dark/light pair.
    pub fn toggled(&self) -> &'static Theme {
        Self::by_name(self.counterpart).unwrap_or_else(Self::default_theme)
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Violet Night (default)
    Theme {
        name: "Violet Night",
        dark: true,
        counterpart: "Violet Day",
        bg: Color::Rgb(11, 8, 19),
        card: Color::Rgb(26, 19, 48),
        fg: Color::Rgb(245, 243, 255),
        fg_dim: Color::Rgb(150, 140, 190),
        accent: Color::Rgb(125, 111, 208),    // p2
        secondary: Color::Rgb(168, 159, 226), // p4
        border: Color::Rgb(58, 48, 100),
        success: Color::Rgb(134, 239, 172),
        error: Color::Rgb(239, 68, 68),
    },
    // 1 - Violet Day
    Theme {
        name: "Violet Day",
        dark: false,
        counterpart: "Violet Night",
        bg: Color::Rgb(250, 248, 255),
        card: Color::Rgb(243, 238, 255),
        fg: Color::Rgb(30, 16, 51),
        fg_dim: Color::Rgb(120, 108, 150),
        accent: Color::Rgb(107, 94, 199),     // p1
        secondary: Color::Rgb(125, 111, 208), // p2
        border: Color::Rgb(214, 208, 240),
        success: Color::Rgb(22, 163, 74),
        error: Color::Rgb(220, 38, 38),
    },
    // 2 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        dark: true,
        counterpart: "Catppuccin Latte",
        bg: Color::Rgb(30, 30, 46),           // base
        card: Color::Rgb(49, 50, 68),         // surface0
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(203, 166, 247),    // mauve
        secondary: Color::Rgb(180, 190, 254), // lavender
        border: Color::Rgb(69, 71, 90),       // surface1
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
    },
    // 3 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        dark: false,
        counterpart: "Catppuccin Mocha",
        bg: Color::Rgb(239, 241, 245),        // base
        card: Color::Rgb(204, 208, 218),      // surface0
        fg: Color::Rgb(76, 79, 105),          // text
        fg_dim: Color::Rgb(156, 160, 176),    // overlay0
        accent: Color::Rgb(136, 57, 239),     // mauve
        secondary: Color::Rgb(114, 135, 253), // lavender
        border: Color::Rgb(188, 192, 204),    // surface1
        success: Color::Rgb(64, 160, 43),     // green
        error: Color::Rgb(210, 15, 57),       // red
    },
];
