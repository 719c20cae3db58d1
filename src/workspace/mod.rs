//! The terminal host.
//!
//! [`Workspace`] is the [`Host`] implementation behind the terminal
//! front-end. It owns the (optional) open editor, keeps track of command
//! registrations and event subscriptions, and answers configuration reads
//! from the loaded [`Config`].

pub mod status_item;

pub use status_item::StatusItem;

use crate::config::Config;
use crate::editor::view::BufferEditor;
use crate::host::{Host, HostEvent, StatusAlignment, Subscription};
use crate::location::controller::POSITION_NAME_KEY;
use std::collections::HashMap;

/// Something registered with the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Registration {
    Command(String),
    Event(HostEvent),
}

/// Host state for the terminal front-end.
#[derive(Debug, Default)]
pub struct Workspace {
    editor: Option<BufferEditor>,
    filename: Option<String>,
    config: Config,
    registrations: HashMap<Subscription, Registration>,
    next_id: u64,
}

impl Workspace {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The open editor, if any.
    pub fn editor(&self) -> Option<&BufferEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut BufferEditor> {
        self.editor.as_mut()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Makes `editor` the active editor, replacing any previous one.
    pub fn open(&mut self, editor: BufferEditor, filename: Option<String>) {
        self.editor = Some(editor);
        self.filename = filename;
    }

    /// Closes the active editor.
    pub fn close(&mut self) -> Option<BufferEditor> {
        self.filename = None;
        self.editor.take()
    }

    /// Returns true while someone is subscribed to `event`.
    pub fn is_subscribed(&self, event: HostEvent) -> bool {
        self.registrations
            .values()
            .any(|registration| *registration == Registration::Event(event))
    }

    /// Returns true while `command` is registered.
    pub fn has_command(&self, command: &str) -> bool {
        self.registrations
            .values()
            .any(|registration| matches!(registration, Registration::Command(id) if id == command))
    }

    fn register(&mut self, registration: Registration) -> Subscription {
        self.next_id += 1;
        let subscription = Subscription(self.next_id);
        self.registrations.insert(subscription, registration);
        subscription
    }
}

impl Host for Workspace {
    type Editor = BufferEditor;
    type Status = StatusItem;

    fn active_editor(&mut self) -> Option<&mut BufferEditor> {
        self.editor.as_mut()
    }

    fn create_status_item(&mut self, alignment: StatusAlignment, priority: i32) -> StatusItem {
        StatusItem::new(alignment, priority)
    }

    fn register_command(&mut self, command: &str) -> Subscription {
        self.register(Registration::Command(command.to_string()))
    }

    fn subscribe(&mut self, event: HostEvent) -> Subscription {
        self.register(Registration::Event(event))
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.registrations.remove(&subscription);
    }

    fn config_value(&self, key: &str) -> Option<String> {
        match key {
            POSITION_NAME_KEY => Some(self.config.position_name.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::TextBuffer;

    #[test]
    fn test_no_editor_until_opened() {
        let mut workspace = Workspace::new(Config::default());
        assert!(workspace.active_editor().is_none());

        workspace.open(BufferEditor::new(TextBuffer::new("text")), None);
        assert!(workspace.active_editor().is_some());

        workspace.close();
        assert!(workspace.active_editor().is_none());
    }

    #[test]
    fn test_subscriptions_are_released() {
        let mut workspace = Workspace::default();
        let selection = workspace.subscribe(HostEvent::SelectionChanged);
        let command = workspace.register_command("demo.command");

        assert!(workspace.is_subscribed(HostEvent::SelectionChanged));
        assert!(!workspace.is_subscribed(HostEvent::ActiveEditorChanged));
        assert!(workspace.has_command("demo.command"));

        workspace.unsubscribe(selection);
        workspace.unsubscribe(command);
        assert!(!workspace.is_subscribed(HostEvent::SelectionChanged));
        assert!(!workspace.has_command("demo.command"));
    }

    #[test]
    fn test_position_name_comes_from_config() {
        let config = Config {
            position_name: "loc".to_string(),
            ..Config::default()
        };
        let workspace = Workspace::new(config);
        assert_eq!(
            workspace.config_value(POSITION_NAME_KEY),
            Some("loc".to_string())
        );
        assert_eq!(workspace.config_value("other.key"), None);
    }
}
