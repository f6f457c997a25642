//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Thread pane styles
pub mod thread {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BORDER_EXPANDED: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const REPLY: Color = palette::TEXT;
    pub const ROOT_POST: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
}

/// RHS header styles
pub mod header {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const CONTROL: Color = palette::TEXT_MUTED;
    pub const CLOSE: Color = palette::PINK;
}

/// New-replies toast styles
pub mod toast {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_HIGHLIGHT;
    pub const MESSAGE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const ACTION: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::UNDERLINED);
    pub const DISMISS: Color = palette::TEXT_MUTED;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
}
