//! Theme system for kindleloc.
//!
//! This module provides the theme infrastructure for kindleloc, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Examples
//!
//! ```
//! use kindleloc::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the kindleloc terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
///
/// # Examples
///
/// ```
/// use kindleloc::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("nord").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a sorted list of all built-in theme names.
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
    ];
    themes.sort();
    themes
}
