//! Editor mode management.
//!
//! The viewer has two modes: `Normal`, where keys move the cursor and run
//! commands, and `Prompt`, where keys edit the text of an open input prompt
//! (the jump-to-location prompt).
//!
//! # Example
//!
//! ```
//! use kindleloc::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! assert_eq!(format!("{}", EditorMode::Prompt), "PROMPT");
//! ```

use std::fmt;

/// Represents the current input mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Navigation and commands.
    #[default]
    Normal,
    /// Editing the text of an input prompt.
    Prompt,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Prompt => write!(f, "PROMPT"),
        }
    }
}
