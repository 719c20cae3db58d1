//! The preview/commit/abort state machine behind the jump command.
//!
//! A [`JumpSession`] is created when the jump prompt opens. It remembers the
//! offset and selections the editor had at that moment and keeps a working
//! copy of the selection set in which slot 0 is a duplicate of the primary
//! selection. Previews only ever rewrite slot 0; the remaining slots are the
//! user's original selections, in order.
//!
//! [`JumpSession::commit`] and [`JumpSession::abort`] consume the session, so
//! the highlight decoration and the preview slot cannot outlive it.

use super::error::LocationError;
use super::translator::PositionTranslator;
use crate::host::{Position, Range, RevealType, Selection, TextDocument, TextEditor};

/// One jump-to-location interaction, from prompt open to commit or abort.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpSession {
    original_offset: usize,
    working_selections: Vec<Selection>,
}

impl JumpSession {
    /// Captures the editor's current cursor and selections.
    pub fn begin<E: TextEditor>(editor: &E) -> Self {
        let primary = editor.selection();
        let original_offset = editor.document().offset_at(primary.active);

        let mut working_selections = vec![primary];
        working_selections.extend(editor.selections());

        Self {
            original_offset,
            working_selections,
        }
    }

    /// Offset of the primary cursor when the session began.
    pub fn original_offset(&self) -> usize {
        self.original_offset
    }

    /// The working selection set; slot 0 is the preview slot.
    pub fn working_selections(&self) -> &[Selection] {
        &self.working_selections
    }

    /// Moves the preview cursor to the location typed so far.
    ///
    /// On success the editor shows the working selection set with the
    /// preview caret as primary, a one-character highlight at the caret, and
    /// the caret scrolled into view. On failure the editor is not touched.
    pub fn preview<E: TextEditor>(
        &mut self,
        editor: &mut E,
        input: &str,
    ) -> Result<usize, LocationError> {
        let offset = PositionTranslator::new(editor.document()).resolve_offset(input)?;
        let position = editor.document().position_at(offset);

        self.working_selections[0] = Selection::caret(position);
        editor.set_selections(self.working_selections.clone());
        highlight(editor, position);
        reveal_primary(editor);

        Ok(offset)
    }

    /// Keeps the previewed position as the only selection.
    pub fn commit<E: TextEditor>(self, editor: &mut E) -> Selection {
        editor.set_decorations(&[]);
        let selection = self.working_selections[0];
        editor.set_selection(selection);
        editor.show_document(selection);
        selection
    }

    /// Drops the preview slot and restores the original selections.
    pub fn abort<E: TextEditor>(mut self, editor: &mut E) {
        editor.set_decorations(&[]);
        self.working_selections.remove(0);
        editor.set_selections(self.working_selections);
        reveal_primary(editor);
    }
}

/// Where the jump command currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No prompt is open
    #[default]
    Idle,
    /// A prompt is open and previews are applied to the editor
    Previewing(JumpSession),
}

impl SessionState {
    pub fn is_previewing(&self) -> bool {
        matches!(self, SessionState::Previewing(_))
    }

    /// Leaves `self` Idle and returns the session that was live, if any.
    pub fn take(&mut self) -> Option<JumpSession> {
        match std::mem::take(self) {
            SessionState::Previewing(session) => Some(session),
            SessionState::Idle => None,
        }
    }
}

fn highlight<E: TextEditor>(editor: &mut E, position: Position) {
    let range = Range::new(position, position.translate(0, 1));
    editor.set_decorations(&[range]);
}

fn reveal_primary<E: TextEditor>(editor: &mut E) {
    let range = editor.selection().range();
    editor.reveal_range(range, RevealType::InCenterIfOutsideViewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::TextBuffer;
    use crate::editor::view::BufferEditor;

    fn editor_with_three_cursors() -> BufferEditor {
        let text = (0..40).map(|_| "x".repeat(99)).collect::<Vec<_>>().join("\n");
        let mut editor = BufferEditor::new(TextBuffer::new(text));
        editor.set_selections(vec![
            Selection::caret(Position::new(2, 3)),
            Selection::caret(Position::new(5, 0)),
            Selection::new(Position::new(7, 1), Position::new(7, 4)),
        ]);
        editor
    }

    #[test]
    fn test_begin_duplicates_primary_into_slot_zero() {
        let editor = editor_with_three_cursors();
        let session = JumpSession::begin(&editor);

        assert_eq!(session.working_selections().len(), 4);
        assert_eq!(session.working_selections()[0], editor.selection());
        assert_eq!(&session.working_selections()[1..], &editor.selections()[..]);
        assert_eq!(session.original_offset(), 203);
    }

    #[test]
    fn test_failed_preview_leaves_editor_alone() {
        let mut editor = editor_with_three_cursors();
        let before = editor.selections();
        let mut session = JumpSession::begin(&editor);

        for input in ["0", "-3", "abc", "9999"] {
            assert!(session.preview(&mut editor, input).is_err());
        }
        assert_eq!(editor.selections(), before);
        assert!(editor.decorations().is_empty());
    }

    #[test]
    fn test_preview_moves_primary_and_highlights() {
        let mut editor = editor_with_three_cursors();
        let mut session = JumpSession::begin(&editor);

        let offset = session.preview(&mut editor, "20").unwrap();
        let position = editor.document().position_at(offset);

        assert_eq!(editor.selection(), Selection::caret(position));
        assert_eq!(editor.selections().len(), 4);
        assert_eq!(
            editor.decorations(),
            &[Range::new(position, position.translate(0, 1))]
        );
    }

    #[test]
    fn test_abort_restores_original_selections() {
        let mut editor = editor_with_three_cursors();
        let before = editor.selections();
        let mut session = JumpSession::begin(&editor);

        session.preview(&mut editor, "12").unwrap();
        session.preview(&mut editor, "3").unwrap();
        session.abort(&mut editor);

        assert_eq!(editor.selections(), before);
        assert!(editor.decorations().is_empty());
    }

    #[test]
    fn test_commit_keeps_single_previewed_selection() {
        let mut editor = editor_with_three_cursors();
        let mut session = JumpSession::begin(&editor);

        let offset = session.preview(&mut editor, "15").unwrap();
        let committed = session.commit(&mut editor);

        assert_eq!(editor.selections(), vec![committed]);
        assert_eq!(editor.document().offset_at(committed.active), offset);
        assert!(editor.decorations().is_empty());
    }

    #[test]
    fn test_take_returns_to_idle() {
        let editor = editor_with_three_cursors();
        let mut state = SessionState::Previewing(JumpSession::begin(&editor));
        assert!(state.is_previewing());
        assert!(state.take().is_some());
        assert_eq!(state, SessionState::Idle);
        assert!(state.take().is_none());
    }
}
