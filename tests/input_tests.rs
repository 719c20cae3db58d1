use kindleloc::editor::mode::EditorMode;
use kindleloc::input::keys::{map_key_event, InputEvent};
use termion::event::{Event, Key, MouseButton, MouseEvent};

fn key(k: Key, mode: EditorMode) -> InputEvent {
    map_key_event(Event::Key(k), &mode)
}

#[test]
fn test_normal_mode_motions() {
    let mode = EditorMode::Normal;
    assert_eq!(key(Key::Char('j'), mode), InputEvent::MoveDown);
    assert_eq!(key(Key::Down, mode), InputEvent::MoveDown);
    assert_eq!(key(Key::Char('k'), mode), InputEvent::MoveUp);
    assert_eq!(key(Key::Char('h'), mode), InputEvent::MoveLeft);
    assert_eq!(key(Key::Char('l'), mode), InputEvent::MoveRight);
    assert_eq!(key(Key::Char('0'), mode), InputEvent::LineStart);
    assert_eq!(key(Key::Char('$'), mode), InputEvent::LineEnd);
    assert_eq!(key(Key::Char('g'), mode), InputEvent::JumpToTop);
    assert_eq!(key(Key::Char('G'), mode), InputEvent::JumpToBottom);
    assert_eq!(key(Key::Ctrl('d'), mode), InputEvent::HalfPageDown);
    assert_eq!(key(Key::Ctrl('u'), mode), InputEvent::HalfPageUp);
    assert_eq!(key(Key::PageDown, mode), InputEvent::FullPageDown);
    assert_eq!(key(Key::PageUp, mode), InputEvent::FullPageUp);
}

#[test]
fn test_normal_mode_commands() {
    let mode = EditorMode::Normal;
    assert_eq!(key(Key::Char('q'), mode), InputEvent::Quit);
    assert_eq!(key(Key::Char('L'), mode), InputEvent::GoToLocation);
    assert_eq!(key(Key::Ctrl('g'), mode), InputEvent::GoToLocation);
    assert_eq!(key(Key::Char('C'), mode), InputEvent::AddCursorBelow);
    assert_eq!(key(Key::Esc, mode), InputEvent::CollapseCursors);
    assert_eq!(key(Key::Char('z'), mode), InputEvent::Unknown);
}

#[test]
fn test_prompt_mode_editing() {
    let mode = EditorMode::Prompt;
    assert_eq!(key(Key::Char('7'), mode), InputEvent::PromptChar('7'));
    assert_eq!(key(Key::Char('q'), mode), InputEvent::PromptChar('q'));
    assert_eq!(key(Key::Backspace, mode), InputEvent::PromptBackspace);
    assert_eq!(key(Key::Delete, mode), InputEvent::PromptDelete);
    assert_eq!(key(Key::Ctrl('u'), mode), InputEvent::PromptClear);
    assert_eq!(key(Key::Home, mode), InputEvent::PromptHome);
    assert_eq!(key(Key::Ctrl('e'), mode), InputEvent::PromptEnd);
    assert_eq!(key(Key::Char('\n'), mode), InputEvent::PromptSubmit);
    assert_eq!(key(Key::Esc, mode), InputEvent::PromptCancel);
    assert_eq!(key(Key::Char('\t'), mode), InputEvent::Unknown);
}

#[test]
fn test_mouse_wheel_ignored_in_prompt() {
    let wheel = Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, 1, 1));
    assert_eq!(
        map_key_event(wheel.clone(), &EditorMode::Normal),
        InputEvent::MoveDown
    );
    assert_eq!(map_key_event(wheel, &EditorMode::Prompt), InputEvent::Unknown);
}
