//! Theme styling for the wizard UI.
//!
//! One truecolor palette (Dracula-derived, pink interactive accent) plus an
//! ANSI-256 fallback for terminals without 24-bit color. Components go
//! through the semantic roles and the helper builders rather than
//! hard-coding colors.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

pub mod helpers;

/// Semantic color roles used throughout the wizard.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,
}

/// Resolved palette plus common style builders.
#[derive(Debug, Clone)]
pub struct Theme {
    roles: ThemeRoles,
}

impl Theme {
    /// Dracula-derived truecolor palette.
    pub fn truecolor() -> Self {
        const BG: Color = Color::Rgb(0x28, 0x2A, 0x36);
        const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A);
        const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2);
        const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4);
        const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD);
        const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6);
        const RED: Color = Color::Rgb(0xFF, 0x55, 0x55);

        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG,
                surface_muted: CURRENT_LINE,
                border: CURRENT_LINE,
                text: FOREGROUND,
                text_secondary: COMMENT,
                text_muted: COMMENT,
                accent_primary: PINK,
                accent_secondary: CYAN,
                error: RED,
                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                focus: PINK,
            },
        }
    }

    /// Conservative palette for terminals without truecolor support.
    pub fn ansi256() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(235),
                surface: Color::Indexed(235),
                surface_muted: Color::Indexed(238),
                border: Color::Indexed(240),
                text: Color::Indexed(255),
                text_secondary: Color::Indexed(247),
                text_muted: Color::Indexed(243),
                accent_primary: Color::Indexed(212),
                accent_secondary: Color::Indexed(117),
                error: Color::Indexed(203),
                selection_bg: Color::Indexed(239),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(212),
            },
        }
    }

    /// Selects a palette based on terminal capabilities.
    pub fn load() -> Self {
        match detect_color_capability() {
            ColorCapability::Truecolor => Self::truecolor(),
            ColorCapability::Ansi256 => {
                debug!("ANSI-only terminal detected; forcing fallback palette.");
                Self::ansi256()
            }
        }
    }

    pub fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    pub fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles.text_secondary)
    }

    pub fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.roles.error)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles.focus } else { self.roles.border };
        Style::default().fg(color)
    }

    pub fn selection_style(&self) -> Style {
        Style::default().fg(self.roles.selection_fg).bg(self.roles.selection_bg)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.roles.text).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

fn detect_color_capability() -> ColorCapability {
    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}
