//! Application state for the terminal front-end.
//!
//! [`App`] owns the [`Workspace`] (the host) and the [`LocationController`]
//! activated against it. It turns [`InputEvent`]s into cursor motions, host
//! notifications and jump prompt transitions:
//!
//! - a motion that changes the selection emits `SelectionChanged`
//! - opening a document emits `ActiveEditorChanged`
//! - the jump command opens a prompt; every edit of the prompt text is
//!   previewed, Enter commits and Esc aborts
//!
//! Notifications only reach the controller while it is subscribed to them.

use crate::editor::mode::EditorMode;
use crate::editor::view::BufferEditor;
use crate::host::{HostEvent, TextEditor};
use crate::input::keys::InputEvent;
use crate::location::controller::{LocationController, PromptRequest, JUMP_COMMAND};
use crate::workspace::{StatusItem, Workspace};

/// Severity of a message shown in the message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A message shown in the message area until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// An open input prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    label: String,
    buffer: String,
    /// Cursor position in characters
    cursor: usize,
}

impl Prompt {
    fn from_request(request: PromptRequest) -> Self {
        let cursor = request.value.chars().count();
        Self {
            label: request.prompt,
            buffer: request.value,
            cursor,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map_or(self.buffer.len(), |(index, _)| index)
    }

    fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.buffer.insert(index, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.buffer.remove(index);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.chars().count() {
            return false;
        }
        let index = self.byte_index(self.cursor);
        self.buffer.remove(index);
        true
    }

    fn clear(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        self.buffer.clear();
        self.cursor = 0;
        true
    }
}

/// Top-level state of the terminal application.
pub struct App {
    workspace: Workspace,
    controller: Option<LocationController<StatusItem>>,
    mode: EditorMode,
    prompt: Option<Prompt>,
    message: Option<Message>,
}

impl App {
    /// Activates the location controller against `workspace`.
    pub fn new(mut workspace: Workspace) -> Self {
        let controller = LocationController::activate(&mut workspace);
        Self {
            workspace,
            controller: Some(controller),
            mode: EditorMode::Normal,
            prompt: None,
            message: None,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn controller(&self) -> Option<&LocationController<StatusItem>> {
        self.controller.as_ref()
    }

    /// The location indicator, while the controller is active.
    pub fn status_item(&self) -> Option<&StatusItem> {
        self.controller.as_ref().map(|c| c.status_item())
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.message = Some(Message {
            text: text.into(),
            level,
        });
    }

    /// Opens `editor` as the active editor.
    pub fn open_document(&mut self, editor: BufferEditor, filename: Option<String>) {
        self.workspace.open(editor, filename);
        self.emit(HostEvent::ActiveEditorChanged);
    }

    /// Closes the active editor, cancelling any jump in progress.
    pub fn close_document(&mut self) {
        self.cancel_prompt();
        self.workspace.close();
        self.emit(HostEvent::ActiveEditorChanged);
    }

    /// Tells the editor how many text rows the UI has.
    pub fn set_viewport_height(&mut self, height: usize) {
        if let Some(editor) = self.workspace.editor_mut() {
            editor.set_viewport_height(height);
        }
    }

    /// Delivers a host notification to the controller if it subscribed.
    pub fn emit(&mut self, event: HostEvent) {
        if !self.workspace.is_subscribed(event) {
            return;
        }
        if let Some(controller) = self.controller.as_mut() {
            controller.handle_event(&mut self.workspace, event);
        }
    }

    /// Runs a registered command. Unknown commands are reported as errors.
    pub fn run_command(&mut self, command: &str) {
        if !self.workspace.has_command(command) {
            self.set_message(format!("Unknown command: {}", command), MessageLevel::Error);
            return;
        }

        if command == JUMP_COMMAND {
            self.go_to_location();
        }
    }

    fn go_to_location(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        // no active editor: nothing to jump in
        if let Some(request) = controller.go_to_location(&mut self.workspace) {
            self.prompt = Some(Prompt::from_request(request));
            self.mode = EditorMode::Prompt;
        }
    }

    /// Applies an input event. Returns true when the application should quit.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        if !matches!(event, InputEvent::Unknown) {
            self.message = None;
        }

        match self.mode {
            EditorMode::Normal => self.apply_normal(event),
            EditorMode::Prompt => {
                self.apply_prompt(event);
                false
            }
        }
    }

    fn apply_normal(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => return true,
            InputEvent::GoToLocation => {
                self.run_command(JUMP_COMMAND);
                return false;
            }
            _ => {}
        }

        let Some(editor) = self.workspace.editor_mut() else {
            return false;
        };

        let changed = match event {
            InputEvent::MoveUp => editor.move_up(),
            InputEvent::MoveDown => editor.move_down(),
            InputEvent::MoveLeft => editor.move_left(),
            InputEvent::MoveRight => editor.move_right(),
            InputEvent::LineStart => editor.move_line_start(),
            InputEvent::LineEnd => editor.move_line_end(),
            InputEvent::JumpToTop => editor.move_to_top(),
            InputEvent::JumpToBottom => editor.move_to_bottom(),
            InputEvent::HalfPageDown => editor.half_page_down(),
            InputEvent::HalfPageUp => editor.half_page_up(),
            InputEvent::FullPageDown => editor.page_down(),
            InputEvent::FullPageUp => editor.page_up(),
            InputEvent::AddCursorBelow => editor.add_cursor_below(),
            InputEvent::CollapseCursors => editor.collapse_to_primary(),
            _ => false,
        };

        if changed {
            self.emit(HostEvent::SelectionChanged);
        }
        false
    }

    fn apply_prompt(&mut self, event: InputEvent) {
        match event {
            InputEvent::PromptSubmit => return self.submit_prompt(),
            InputEvent::PromptCancel => return self.cancel_prompt(),
            _ => {}
        }

        let Some(prompt) = self.prompt.as_mut() else {
            self.mode = EditorMode::Normal;
            return;
        };

        let edited = match event {
            InputEvent::PromptChar(c) => {
                prompt.insert(c);
                true
            }
            InputEvent::PromptBackspace => prompt.backspace(),
            InputEvent::PromptDelete => prompt.delete(),
            InputEvent::PromptClear => prompt.clear(),
            InputEvent::PromptLeft => {
                prompt.cursor = prompt.cursor.saturating_sub(1);
                false
            }
            InputEvent::PromptRight => {
                prompt.cursor = (prompt.cursor + 1).min(prompt.buffer.chars().count());
                false
            }
            InputEvent::PromptHome => {
                prompt.cursor = 0;
                false
            }
            InputEvent::PromptEnd => {
                prompt.cursor = prompt.buffer.chars().count();
                false
            }
            _ => false,
        };

        if edited {
            let input = prompt.buffer.clone();
            self.preview(&input);
        }
    }

    fn preview(&mut self, input: &str) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        // rejected input simply leaves the cursor where it was
        if controller.preview(&mut self.workspace, input).is_ok() {
            self.emit(HostEvent::SelectionChanged);
        }
    }

    /// Closes the prompt with its current text, committing the preview.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.mode = EditorMode::Normal;
        if let Some(controller) = self.controller.as_mut() {
            controller.finish(&mut self.workspace, Some(prompt.buffer()));
        }
        self.emit(HostEvent::SelectionChanged);
    }

    /// Dismisses the prompt without a value, restoring the selections.
    pub fn cancel_prompt(&mut self) {
        if self.prompt.take().is_none() {
            return;
        }
        self.mode = EditorMode::Normal;
        if let Some(controller) = self.controller.as_mut() {
            controller.finish(&mut self.workspace, None);
        }
        self.emit(HostEvent::SelectionChanged);
    }

    /// Disposes the controller, releasing its registrations.
    pub fn shutdown(&mut self) {
        self.cancel_prompt();
        if let Some(controller) = self.controller.take() {
            controller.dispose(&mut self.workspace);
        }
    }

    /// Returns the primary cursor as a one-based (line, column) pair.
    pub fn cursor_position(&self) -> Option<(usize, usize)> {
        self.workspace.editor().map(|editor| {
            let active = editor.selection().active;
            (active.line + 1, active.character + 1)
        })
    }
}
