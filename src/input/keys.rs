//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key, MouseButton, MouseEvent};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move cursor, jump) rather
/// than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Move to the start of the line (0, Home)
    LineStart,
    /// Move to the end of the line ($, End)
    LineEnd,
    /// Jump to top of document (g)
    JumpToTop,
    /// Jump to bottom of document (G)
    JumpToBottom,
    /// Half-page down (Ctrl-d)
    HalfPageDown,
    /// Half-page up (Ctrl-u)
    HalfPageUp,
    /// Full-page down (Ctrl-f, PageDown key)
    FullPageDown,
    /// Full-page up (Ctrl-b, PageUp key)
    FullPageUp,
    /// Add a cursor on the next line (C)
    AddCursorBelow,
    /// Keep only the primary cursor (Esc)
    CollapseCursors,
    /// Open the jump-to-location prompt (L, Ctrl-g)
    GoToLocation,
    /// Insert a character into the prompt
    PromptChar(char),
    /// Delete the character before the prompt cursor
    PromptBackspace,
    /// Delete the character under the prompt cursor
    PromptDelete,
    /// Clear the prompt text (Ctrl-u)
    PromptClear,
    /// Move the prompt cursor left
    PromptLeft,
    /// Move the prompt cursor right
    PromptRight,
    /// Move the prompt cursor to the start
    PromptHome,
    /// Move the prompt cursor to the end
    PromptEnd,
    /// Accept the prompt (Enter)
    PromptSubmit,
    /// Dismiss the prompt (Esc)
    PromptCancel,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use kindleloc::editor::mode::EditorMode;
/// use kindleloc::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::MoveDown);
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, &EditorMode::Prompt), InputEvent::PromptChar('j'));
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    let key = match event {
        Event::Key(k) => k,
        Event::Mouse(MouseEvent::Press(MouseButton::WheelUp, _, _))
            if *mode == EditorMode::Normal =>
        {
            return InputEvent::MoveUp
        }
        Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, _, _))
            if *mode == EditorMode::Normal =>
        {
            return InputEvent::MoveDown
        }
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Ctrl('d') => InputEvent::HalfPageDown,
            Key::Ctrl('u') => InputEvent::HalfPageUp,
            Key::Ctrl('f') | Key::PageDown => InputEvent::FullPageDown,
            Key::Ctrl('b') | Key::PageUp => InputEvent::FullPageUp,
            Key::Ctrl('g') => InputEvent::GoToLocation,
            Key::Char('q') => InputEvent::Quit,
            Key::Char('j') | Key::Down => InputEvent::MoveDown,
            Key::Char('k') | Key::Up => InputEvent::MoveUp,
            Key::Char('h') | Key::Left => InputEvent::MoveLeft,
            Key::Char('l') | Key::Right => InputEvent::MoveRight,
            Key::Char('0') | Key::Home => InputEvent::LineStart,
            Key::Char('$') | Key::End => InputEvent::LineEnd,
            Key::Char('g') => InputEvent::JumpToTop,
            Key::Char('G') => InputEvent::JumpToBottom,
            Key::Char('C') => InputEvent::AddCursorBelow,
            Key::Char('L') => InputEvent::GoToLocation,
            Key::Esc => InputEvent::CollapseCursors,
            _ => InputEvent::Unknown,
        },
        EditorMode::Prompt => match key {
            Key::Esc => InputEvent::PromptCancel,
            Key::Char('\n') => InputEvent::PromptSubmit,
            Key::Backspace => InputEvent::PromptBackspace,
            Key::Delete => InputEvent::PromptDelete,
            Key::Ctrl('u') => InputEvent::PromptClear,
            Key::Left => InputEvent::PromptLeft,
            Key::Right => InputEvent::PromptRight,
            Key::Home | Key::Ctrl('a') => InputEvent::PromptHome,
            Key::End | Key::Ctrl('e') => InputEvent::PromptEnd,
            Key::Char(c) if !c.is_control() => InputEvent::PromptChar(c),
            _ => InputEvent::Unknown,
        },
    }
}
