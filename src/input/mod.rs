//! Terminal input: a thin layer over crossterm events.

pub mod keyboard;

pub use keyboard::{Edit, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, LineEditor, LineInput};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Wait up to `timeout` for one key press. Other events (resize, mouse,
/// focus) and key releases are consumed and reported as `None`.
///
/// Never blocks longer than `timeout`; callers loop for an unbounded wait.
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if keyboard::is_press(&key) => Ok(Some(key)),
        _ => Ok(None),
    }
}
