//! Document model for kindleloc.
//!
//! This module provides [`buffer::TextBuffer`], an immutable in-memory text
//! document that implements the [`crate::host::TextDocument`] contract. It is
//! the document type opened by the terminal front-end.
//!
//! # Example
//!
//! ```
//! use kindleloc::document::buffer::TextBuffer;
//! use kindleloc::host::{Position, TextDocument};
//!
//! let buffer = TextBuffer::new("first\nsecond");
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.offset_at(Position::new(1, 2)), 8);
//! ```

pub mod buffer;
