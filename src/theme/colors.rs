//! Color definitions for kindleloc themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the kindleloc terminal UI: text, cursors and the location
//! highlight, the status line, and message colors.

use ratatui::style::Color;

/// Defines all colors used in a kindleloc theme.
///
/// # Examples
///
/// ```
/// use kindleloc::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let dark = ThemeColors::default_dark();
/// assert_eq!(dark.background, Color::Reset);
/// assert_eq!(dark.status_line_bg, Color::White);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Text colors
    /// Main background color for the text view.
    pub background: Color,
    /// Main foreground/text color for the text view.
    pub foreground: Color,
    /// Color for the line number gutter.
    pub line_number: Color,

    // Cursor colors
    /// Background of the primary cursor cell.
    pub cursor: Color,
    /// Background of additional cursor cells and selected text.
    pub secondary_cursor: Color,
    /// Outline color of the location preview highlight.
    pub location_highlight: Color,

    // Status line colors
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Color for the location indicator in the status line.
    pub status_item: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages and prompts.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the result follows the terminal's own palette.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            line_number: Color::DarkGray,

            cursor: Color::LightBlue,
            secondary_cursor: Color::DarkGray,
            location_highlight: Color::Yellow,

            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            status_item: Color::Blue,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindleloc::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250), // off-white
            foreground: Color::Rgb(56, 58, 66),    // dark grey
            line_number: Color::Rgb(160, 161, 167),

            cursor: Color::Rgb(64, 120, 242),
            secondary_cursor: Color::Rgb(229, 229, 230),
            location_highlight: Color::Rgb(193, 132, 1),

            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),
            status_item: Color::Rgb(152, 195, 121),

            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }

    /// Returns the Gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),    // dark bg
            foreground: Color::Rgb(235, 219, 178), // light fg
            line_number: Color::Rgb(146, 131, 116),

            cursor: Color::Rgb(251, 184, 108),          // orange
            secondary_cursor: Color::Rgb(80, 73, 69),   // bg2
            location_highlight: Color::Rgb(250, 189, 47), // yellow

            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            status_item: Color::Rgb(184, 187, 38), // green

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    ///
    /// An arctic, north-bluish color palette.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),    // polar night darkest
            foreground: Color::Rgb(216, 222, 233), // snow storm lightest
            line_number: Color::Rgb(76, 86, 106),

            cursor: Color::Rgb(136, 192, 208), // frost cyan
            secondary_cursor: Color::Rgb(67, 76, 94),
            location_highlight: Color::Rgb(235, 203, 139), // aurora yellow

            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),
            status_item: Color::Rgb(163, 190, 140), // aurora green

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }
}
