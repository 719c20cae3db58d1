//! Contracts between the location logic and the editor hosting it.
//!
//! The location controller never owns a document or an editor. Every event
//! hands it a [`Host`], which resolves the currently active [`TextEditor`]
//! (if any) fresh each time. The terminal front-end in
//! [`crate::workspace`] is one implementation; tests provide their own.
//!
//! # Addressing
//!
//! Documents are addressed two ways:
//!
//! - [`Position`]: zero-based line and character within that line
//! - offset: count of characters (Unicode scalar values) from the start
//!
//! Out-of-range positions and offsets are clamped by the host, which is how
//! the maximum offset of a document is discovered ([`Position::MAX`]).

use std::borrow::Cow;

/// A line/character coordinate in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character index within the line
    pub character: usize,
}

impl Position {
    /// A sentinel past the end of any document; hosts clamp it to the last position.
    pub const MAX: Position = Position {
        line: usize::MAX,
        character: usize::MAX,
    };

    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Returns a position shifted by the given line and character deltas.
    ///
    /// Saturates instead of overflowing; the host clamps the result when it
    /// is used.
    pub fn translate(&self, line_delta: usize, character_delta: usize) -> Self {
        Self {
            line: self.line.saturating_add(line_delta),
            character: self.character.saturating_add(character_delta),
        }
    }
}

/// A half-open range between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Creates a range, ordering the endpoints so that `start <= end`.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `position` lies inside the range (end exclusive).
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

/// A selection with an anchor and an active end (where the caret is).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A zero-width selection: a plain caret at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// How a range should be scrolled into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealType {
    /// Scroll the minimum amount needed
    #[default]
    Default,
    /// Center the range only when it is currently off screen
    InCenterIfOutsideViewport,
}

/// Which side of the status bar an item lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAlignment {
    Left,
    Right,
}

/// Notifications a host can deliver to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The selection set of the active editor changed
    SelectionChanged,
    /// A different editor (or none) became active
    ActiveEditorChanged,
}

/// Handle for a registration (event subscription or command) that must be
/// released through [`Host::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

/// Read access to a host-owned document.
pub trait TextDocument {
    /// Converts a position to an offset, clamping out-of-range positions.
    fn offset_at(&self, position: Position) -> usize;

    /// Converts an offset to a position, clamping out-of-range offsets.
    fn position_at(&self, offset: usize) -> Position;

    /// Full document text.
    fn text(&self) -> Cow<'_, str>;

    /// Text covered by `range` (clamped to the document).
    fn text_range(&self, range: Range) -> Cow<'_, str>;

    /// Number of lines; an empty document has one empty line.
    fn line_count(&self) -> usize;
}

/// An editor view onto a document, with selections and decorations.
pub trait TextEditor {
    type Document: TextDocument;

    fn document(&self) -> &Self::Document;

    /// The primary selection (slot 0 of [`TextEditor::selections`]).
    fn selection(&self) -> Selection;

    /// All selections, primary first.
    fn selections(&self) -> Vec<Selection>;

    /// Replaces the whole selection set with a single selection.
    fn set_selection(&mut self, selection: Selection);

    /// Replaces the selection set; slot 0 becomes primary. Empty sets are ignored.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Replaces the highlight decoration ranges; an empty slice clears them.
    fn set_decorations(&mut self, ranges: &[Range]);

    /// Scrolls `range` into view.
    fn reveal_range(&mut self, range: Range, reveal: RevealType);

    /// Focuses the document with `selection` as its only selection.
    fn show_document(&mut self, selection: Selection);
}

/// A status-bar item owned by whoever created it.
pub trait StatusIndicator {
    fn set_text(&mut self, text: &str);
    fn set_tooltip(&mut self, tooltip: &str);
    fn set_command(&mut self, command: &str);
    fn show(&mut self);
    fn hide(&mut self);
    fn dispose(&mut self);
}

/// The environment the location controller runs in.
pub trait Host {
    type Editor: TextEditor;
    type Status: StatusIndicator;

    /// The active editor, or `None` when no document is open.
    fn active_editor(&mut self) -> Option<&mut Self::Editor>;

    fn create_status_item(&mut self, alignment: StatusAlignment, priority: i32) -> Self::Status;

    fn register_command(&mut self, command: &str) -> Subscription;

    fn subscribe(&mut self, event: HostEvent) -> Subscription;

    /// Releases a command registration or event subscription.
    fn unsubscribe(&mut self, subscription: Subscription);

    /// Reads a single configuration string, `None` when unset.
    fn config_value(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_orders_endpoints() {
        let range = Range::new(Position::new(3, 1), Position::new(1, 4));
        assert_eq!(range.start, Position::new(1, 4));
        assert_eq!(range.end, Position::new(3, 1));
    }

    #[test]
    fn test_range_contains_is_end_exclusive() {
        let range = Range::new(Position::new(0, 2), Position::new(0, 3));
        assert!(range.contains(Position::new(0, 2)));
        assert!(!range.contains(Position::new(0, 3)));
    }

    #[test]
    fn test_translate_saturates() {
        let p = Position::MAX.translate(0, 1);
        assert_eq!(p, Position::MAX);
    }

    #[test]
    fn test_caret_is_empty() {
        let sel = Selection::caret(Position::new(2, 5));
        assert!(sel.is_empty());
        assert!(sel.range().is_empty());
    }
}
