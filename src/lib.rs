//! kindleloc - e-reader style locations for plain text documents.
//!
//! A location is the number of fixed-size chunks of UTF-8 bytes before the
//! cursor, the way e-readers number positions in a book. The
//! [`location`] module converts between locations and cursor positions and
//! runs the interactive "jump to location" workflow against any editor that
//! implements the [`host`] contracts. The remaining modules make up a small
//! terminal viewer hosting it.

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod host;
pub mod input;
pub mod location;
pub mod theme;
pub mod ui;
pub mod workspace;
