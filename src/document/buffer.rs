//! In-memory text buffer with line/character and offset addressing.
//!
//! The buffer indexes line boundaries once at construction. Offsets count
//! characters (Unicode scalar values), so a multi-byte character advances the
//! offset by one while advancing the UTF-8 byte length by up to four. Line
//! terminators (`\n` or `\r\n`) count toward offsets but are never part of a
//! line's characters.

use crate::host::{Position, Range, TextDocument};
use std::borrow::Cow;

/// Layout of a single line within the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    /// Byte index of the first character of the line
    byte_start: usize,
    /// Byte length of the line content, excluding the terminator
    byte_len: usize,
    /// Offset of the first character of the line
    char_start: usize,
    /// Character count of the line content, excluding the terminator
    char_len: usize,
}

/// An immutable text document.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    lines: Vec<LineSpan>,
    char_count: usize,
}

impl TextBuffer {
    /// Creates a buffer from the given text and indexes its lines.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut byte_start = 0;
        let mut char_start = 0;

        for segment in text.split('\n') {
            let content = segment.strip_suffix('\r').unwrap_or(segment);
            let char_len = content.chars().count();
            lines.push(LineSpan {
                byte_start,
                byte_len: content.len(),
                char_start,
                char_len,
            });

            // segment plus the '\n' that split consumed
            byte_start += segment.len() + 1;
            char_start += segment.chars().count() + 1;
        }

        let char_count = text.chars().count();
        Self {
            text,
            lines,
            char_count,
        }
    }

    /// Returns the content of line `index` without its terminator.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines
            .get(index)
            .map(|span| &self.text[span.byte_start..span.byte_start + span.byte_len])
    }

    /// Character length of line `index`, or 0 if it does not exist.
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, |span| span.char_len)
    }

    /// Total UTF-8 byte length of the document.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Total character count of the document.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clamps a position onto an existing line and character.
    pub fn clamp_position(&self, position: Position) -> Position {
        let line = position.line.min(self.lines.len() - 1);
        let character = position.character.min(self.lines[line].char_len);
        Position::new(line, character)
    }

    fn byte_index(&self, position: Position) -> usize {
        let position = self.clamp_position(position);
        let span = self.lines[position.line];
        let content = &self.text[span.byte_start..span.byte_start + span.byte_len];
        let within = content
            .char_indices()
            .nth(position.character)
            .map_or(span.byte_len, |(index, _)| index);
        span.byte_start + within
    }
}

impl TextDocument for TextBuffer {
    fn offset_at(&self, position: Position) -> usize {
        let position = self.clamp_position(position);
        self.lines[position.line].char_start + position.character
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_count);
        let line = self
            .lines
            .partition_point(|span| span.char_start <= offset)
            .saturating_sub(1);
        let span = self.lines[line];
        // offsets inside a "\r\n" terminator land on the end of the line
        Position::new(line, (offset - span.char_start).min(span.char_len))
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn text_range(&self, range: Range) -> Cow<'_, str> {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end).max(start);
        Cow::Borrowed(&self.text[start..end])
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(String::new())
    }
}
