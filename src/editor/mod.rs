//! Editor views onto documents.
//!
//! This module provides the in-memory editor used by the terminal front-end.
//! It implements the [`crate::host::TextEditor`] contract: an ordered set of
//! selections (primary first), highlight decorations and a scrolled viewport.
//!
//! # Modules
//!
//! - `mode`: Normal/Prompt input modes
//! - `view`: `BufferEditor`, selections, cursor motions and reveal
//!
//! # Example
//!
//! ```
//! use kindleloc::document::buffer::TextBuffer;
//! use kindleloc::editor::view::BufferEditor;
//! use kindleloc::host::{Position, TextEditor};
//!
//! let mut editor = BufferEditor::new(TextBuffer::new("one\ntwo"));
//! editor.move_down();
//! assert_eq!(editor.selection().active, Position::new(1, 0));
//! ```

pub mod mode;
pub mod view;
