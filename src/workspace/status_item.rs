//! Status-bar item rendered by the terminal status line.

use crate::host::{StatusAlignment, StatusIndicator};

/// A status-bar entry: text, tooltip and the command it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    alignment: StatusAlignment,
    priority: i32,
    text: String,
    tooltip: Option<String>,
    command: Option<String>,
    visible: bool,
    disposed: bool,
}

impl StatusItem {
    /// Creates a hidden, empty item.
    pub fn new(alignment: StatusAlignment, priority: i32) -> Self {
        Self {
            alignment,
            priority,
            text: String::new(),
            tooltip: None,
            command: None,
            visible: false,
            disposed: false,
        }
    }

    pub fn alignment(&self) -> StatusAlignment {
        self.alignment
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.disposed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl StatusIndicator for StatusItem {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_tooltip(&mut self, tooltip: &str) {
        self.tooltip = Some(tooltip.to_string());
    }

    fn set_command(&mut self, command: &str) {
        self.command = Some(command.to_string());
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    /// Hides the item for good; later `show` calls have no visible effect.
    fn dispose(&mut self) {
        self.visible = false;
        self.disposed = true;
    }
}
