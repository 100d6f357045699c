//! Color palettes for the TUI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Role attribution
    pub assistant: Color,
    pub user: Color,

    // Semantic
    pub error: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(23, 23, 23),    // #171717
            surface: Color::Rgb(31, 31, 31), // #1f1f1f

            // Foregrounds
            text: Color::Rgb(255, 255, 255),    // #ffffff
            subtext: Color::Rgb(156, 163, 175), // #9ca3af
            muted: Color::Rgb(107, 114, 128),   // #6b7280

            // Accents
            primary: Color::Rgb(59, 130, 246), // #3b82f6 (blue)

            // Role attribution
            assistant: Color::Rgb(59, 130, 246), // #3b82f6 (blue)
            user: Color::Rgb(75, 85, 99),        // #4b5563 (grey)

            // Semantic
            error: Color::Rgb(239, 68, 68), // #ef4444 (red)

            // Borders
            border: Color::Rgb(45, 45, 45),           // #2d2d2d
            border_focused: Color::Rgb(59, 130, 246), // #3b82f6 (blue)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            // Maximum contrast backgrounds
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            // Maximum contrast foregrounds
            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            // Bright accents
            primary: Color::Cyan,

            // Role attribution
            assistant: Color::Cyan,
            user: Color::Green,

            // Semantic
            error: Color::Red,

            // Borders
            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creates() {
        let theme = Theme::dark();
        assert!(matches!(theme.base, Color::Rgb(23, 23, 23)));
        assert!(matches!(theme.primary, Color::Rgb(59, 130, 246)));
    }

    #[test]
    fn test_high_contrast_theme_creates() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_default_is_dark() {
        let default = Theme::default();
        assert!(matches!(default.base, Color::Rgb(23, 23, 23)));
    }
}
