//! The in-memory editor used by the terminal front-end.
//!
//! A [`BufferEditor`] owns a [`TextBuffer`], an ordered list of selections
//! (the first one is primary), the ranges of the highlight decoration and a
//! viewport described by its first visible line and its height.
//!
//! Cursor motions apply to every selection and collapse it to a caret, like
//! most multi-cursor editors. Each motion returns whether the selection set
//! changed so the caller knows when to emit a selection-changed notification.

use crate::document::buffer::TextBuffer;
use crate::host::{Position, Range, RevealType, Selection, TextDocument, TextEditor};

/// Viewport height assumed until the UI reports the real one.
const DEFAULT_VIEWPORT_HEIGHT: usize = 24;

/// An editor view of a single document.
#[derive(Debug, Clone)]
pub struct BufferEditor {
    document: TextBuffer,
    selections: Vec<Selection>,
    decorations: Vec<Range>,
    scroll_offset: usize,
    viewport_height: usize,
    focused: bool,
}

impl BufferEditor {
    /// Creates an editor with a single caret at the start of `document`.
    pub fn new(document: TextBuffer) -> Self {
        Self {
            document,
            selections: vec![Selection::default()],
            decorations: Vec::new(),
            scroll_offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            focused: true,
        }
    }

    /// Current highlight decoration ranges.
    pub fn decorations(&self) -> &[Range] {
        &self.decorations
    }

    /// First visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Records the height of the area the editor is drawn in and keeps the
    /// primary caret on screen.
    pub fn set_viewport_height(&mut self, height: usize) {
        if height == 0 || height == self.viewport_height {
            return;
        }
        self.viewport_height = height;
        let range = self.selection().range();
        self.reveal_range(range, RevealType::Default);
    }

    /// Returns true if `line` is inside the viewport.
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.scroll_offset && line < self.scroll_offset + self.viewport_height
    }

    pub fn move_left(&mut self) -> bool {
        self.move_carets(|doc, p| doc.position_at(doc.offset_at(p).saturating_sub(1)))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_carets(|doc, p| {
            let next = doc.position_at(doc.offset_at(p) + 1);
            // step over the second half of a "\r\n" terminator
            if next == p {
                doc.position_at(doc.offset_at(p) + 2)
            } else {
                next
            }
        })
    }

    pub fn move_up(&mut self) -> bool {
        self.move_lines(-1)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_lines(1)
    }

    pub fn move_line_start(&mut self) -> bool {
        self.move_carets(|_, p| Position::new(p.line, 0))
    }

    pub fn move_line_end(&mut self) -> bool {
        self.move_carets(|doc, p| doc.clamp_position(Position::new(p.line, usize::MAX)))
    }

    pub fn move_to_top(&mut self) -> bool {
        self.move_carets(|_, _| Position::default())
    }

    pub fn move_to_bottom(&mut self) -> bool {
        self.move_carets(|doc, _| doc.position_at(usize::MAX))
    }

    pub fn half_page_down(&mut self) -> bool {
        self.move_lines((self.viewport_height / 2).max(1) as isize)
    }

    pub fn half_page_up(&mut self) -> bool {
        self.move_lines(-((self.viewport_height / 2).max(1) as isize))
    }

    pub fn page_down(&mut self) -> bool {
        self.move_lines(self.viewport_height.max(1) as isize)
    }

    pub fn page_up(&mut self) -> bool {
        self.move_lines(-(self.viewport_height.max(1) as isize))
    }

    /// Adds a caret one line below the last selection, at the same column.
    ///
    /// Returns false when the last selection is already on the last line.
    pub fn add_cursor_below(&mut self) -> bool {
        let Some(last) = self.selections.last().copied() else {
            return false;
        };
        let line = last.active.line + 1;
        if line >= self.document.line_count() {
            return false;
        }
        let position = self
            .document
            .clamp_position(Position::new(line, last.active.character));
        self.selections.push(Selection::caret(position));
        true
    }

    /// Drops every selection but the primary one.
    pub fn collapse_to_primary(&mut self) -> bool {
        if self.selections.len() <= 1 {
            return false;
        }
        self.selections.truncate(1);
        true
    }

    fn move_lines(&mut self, delta: isize) -> bool {
        self.move_carets(|doc, p| {
            let line = p.line.saturating_add_signed(delta);
            doc.clamp_position(Position::new(line, p.character))
        })
    }

    fn move_carets(&mut self, motion: impl Fn(&TextBuffer, Position) -> Position) -> bool {
        let before = self.selections.clone();

        let mut moved: Vec<Selection> = Vec::with_capacity(self.selections.len());
        for selection in &self.selections {
            let caret = Selection::caret(motion(&self.document, selection.active));
            if !moved.contains(&caret) {
                moved.push(caret);
            }
        }
        self.selections = moved;

        let range = self.selection().range();
        self.reveal_range(range, RevealType::Default);
        self.selections != before
    }

    fn clamp_selection(&self, selection: Selection) -> Selection {
        Selection::new(
            self.document.clamp_position(selection.anchor),
            self.document.clamp_position(selection.active),
        )
    }

    fn last_scroll_line(&self) -> usize {
        self.document.line_count().saturating_sub(1)
    }
}

impl TextEditor for BufferEditor {
    type Document = TextBuffer;

    fn document(&self) -> &TextBuffer {
        &self.document
    }

    fn selection(&self) -> Selection {
        self.selections[0]
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selections = vec![self.clamp_selection(selection)];
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        if selections.is_empty() {
            return;
        }
        self.selections = selections
            .into_iter()
            .map(|selection| self.clamp_selection(selection))
            .collect();
    }

    fn set_decorations(&mut self, ranges: &[Range]) {
        self.decorations = ranges.to_vec();
    }

    fn reveal_range(&mut self, range: Range, reveal: RevealType) {
        let line = range.start.line.min(self.last_scroll_line());
        let height = self.viewport_height.max(1);
        let outside = !self.is_line_visible(line);

        self.scroll_offset = match reveal {
            RevealType::Default if line < self.scroll_offset => line,
            RevealType::Default if line >= self.scroll_offset + height => line + 1 - height,
            RevealType::Default => self.scroll_offset,
            RevealType::InCenterIfOutsideViewport if outside => line.saturating_sub(height / 2),
            RevealType::InCenterIfOutsideViewport => self.scroll_offset,
        }
        .min(self.last_scroll_line());
    }

    fn show_document(&mut self, selection: Selection) {
        self.focused = true;
        self.set_selection(selection);
        let range = self.selection().range();
        self.reveal_range(range, RevealType::InCenterIfOutsideViewport);
    }
}
