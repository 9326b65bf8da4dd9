//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to maintain consistency
//! and enable future theming capabilities. Type badge and stat bar
//! colors come from the shared tables in [`crate::config`] so the
//! TUI and the CLI render them identically.

use ratatui::style::{Color, Modifier, Style};

use crate::config;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Dex number colors
    pub id: Color,
    pub id_selected: Color,

    // Detail card
    pub genus: Color,
    pub badge_text: Color,
    pub hidden_ability: Color,
    pub bar_empty: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_search: (Color, Color),

    // Search input
    pub search_cursor: Color,

    // Message
    pub message: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Pokédex color scheme: the device red for focus, the logo
        // yellow for dex numbers, cerulean for accents.
        Self {
            // General UI
            border: Color::Rgb(117, 113, 94),        // Muted brownish-gray
            border_focused: Color::Rgb(220, 10, 45), // Pokédex shell red

            // Text
            text: Color::Rgb(248, 248, 242),      // Off-white foreground
            text_muted: Color::Rgb(117, 113, 94), // Muted comment color
            text_highlight: Color::Rgb(255, 255, 255), // Bright white

            // Dex numbers - logo yellow
            id: Color::Rgb(255, 203, 5),
            id_selected: Color::Rgb(255, 203, 5), // Same yellow (bright already)

            // Detail card
            genus: Color::Rgb(58, 177, 222),      // Cerulean
            badge_text: Color::Rgb(248, 248, 242), // White on type-colored badge
            hidden_ability: Color::Rgb(174, 129, 255), // Purple
            bar_empty: Color::Rgb(60, 60, 60),    // Dark track behind stat bars

            // Footer/Mode colors (bg, fg)
            mode_normal: (Color::Rgb(58, 177, 222), Color::Rgb(33, 33, 33)), // Cerulean bg
            mode_search: (Color::Rgb(255, 203, 5), Color::Rgb(33, 33, 33)),  // Yellow bg

            // Search input
            search_cursor: Color::Rgb(58, 177, 222), // Cerulean

            // Message - fetch failures land here
            message: Color::Rgb(253, 151, 31), // Amber

            // Help popup
            help_key: Color::Rgb(58, 177, 222),     // Cerulean
            help_border: Color::Rgb(255, 203, 5),   // Yellow
        }
    }
}

impl Theme {
    /// Get the color for a Pokémon type by name
    pub fn type_color(&self, name: &str) -> Color {
        let (r, g, b) = config::type_color(name);
        Color::Rgb(r, g, b)
    }

    /// Get the color for a stat bar at the given fill percentage
    pub fn bar_color(&self, percentage: f64) -> Color {
        let (r, g, b) = config::progress_color(percentage);
        Color::Rgb(r, g, b)
    }

    // Style builders

    /// Style for selected items
    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for the dex number column
    pub fn id_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.id_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.id)
        }
    }

    /// Badge style for a Pokémon type (type color as background)
    pub fn type_badge_style(&self, name: &str) -> Style {
        Style::default()
            .bg(self.type_color(name))
            .fg(self.badge_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
