//! Input event handler for polling and processing terminal events.

use super::keys::map_key_event;
use crate::app::App;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Polls terminal events and applies them to the [`App`].
pub struct InputHandler {
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Waits for the next terminal event.
    ///
    /// Returns `None` once the input stream is exhausted.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        let next = match &mut self.events {
            EventSource::Stdin(events) => events.next(),
            EventSource::Tty(events) => events.next(),
        };

        match next {
            Some(event) => Ok(Some(event?)),
            None => Ok(None),
        }
    }

    /// Maps `event` for the app's current mode and applies it.
    ///
    /// Returns true if the application should quit.
    pub fn handle_event(&mut self, event: Event, app: &mut App) -> Result<bool> {
        let input = map_key_event(event, &app.mode());
        Ok(app.apply(input))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
