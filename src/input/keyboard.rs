// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::settings::keybinds;

/// Result of reading one menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// The submitted text, trimmed.
    Line(String),
    /// Ctrl+C or Ctrl+D: the caller treats this as "back".
    Interrupted,
}

/// What the terminal should do after feeding one key to a `LineEditor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Print this character.
    Echo(char),
    /// Remove the last printed character.
    Erase,
    /// The line is finished.
    Done(LineInput),
    /// Key had no effect.
    Nothing,
}

/// Minimal line editor for raw mode: typing, backspace, Enter, and Ctrl+C /
/// Ctrl+D as cancel. Keeps the logic free of terminal I/O.
#[derive(Debug, Default)]
pub struct LineEditor {
    buf: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn feed(&mut self, ev: &KeyEvent) -> Edit {
        if ev.kind == KeyEventKind::Release {
            return Edit::Nothing;
        }
        if keybinds::is_interrupt(ev) || keybinds::is_end_of_input(ev) {
            self.buf.clear();
            return Edit::Done(LineInput::Interrupted);
        }
        if keybinds::is_enter(ev) {
            let line = std::mem::take(&mut self.buf);
            return Edit::Done(LineInput::Line(line.trim().to_string()));
        }
        if keybinds::is_backspace(ev) {
            return match self.buf.pop() {
                Some(_) => Edit::Erase,
                None => Edit::Nothing,
            };
        }
        match keybinds::typed_char(ev) {
            Some(c) => {
                self.buf.push(c);
                Edit::Echo(c)
            }
            None => Edit::Nothing,
        }
    }
}

/// True for key events that represent an actual press (not a release).
pub fn is_press(ev: &KeyEvent) -> bool {
    ev.kind != KeyEventKind::Release
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(c: KeyCode) -> KeyEvent {
        KeyEvent::new(c, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_enter_submit_trimmed_line() {
        let mut ed = LineEditor::new();
        for c in [' ', '1', '2', ' '] {
            assert_eq!(ed.feed(&press(c)), Edit::Echo(c));
        }
        assert_eq!(ed.feed(&code(KeyCode::Enter)), Edit::Done(LineInput::Line("12".into())));
        assert_eq!(ed.buffer(), "");
    }

    #[test]
    fn backspace_erases_and_stops_at_empty() {
        let mut ed = LineEditor::new();
        ed.feed(&press('9'));
        assert_eq!(ed.feed(&code(KeyCode::Backspace)), Edit::Erase);
        assert_eq!(ed.feed(&code(KeyCode::Backspace)), Edit::Nothing);
        assert_eq!(ed.feed(&code(KeyCode::Enter)), Edit::Done(LineInput::Line(String::new())));
    }

    #[test]
    fn ctrl_c_and_ctrl_d_cancel() {
        let mut ed = LineEditor::new();
        ed.feed(&press('3'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ed.feed(&ctrl_c), Edit::Done(LineInput::Interrupted));
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(ed.feed(&ctrl_d), Edit::Done(LineInput::Interrupted));
    }

    #[test]
    fn releases_and_arrows_are_ignored() {
        let mut ed = LineEditor::new();
        let mut rel = press('x');
        rel.kind = KeyEventKind::Release;
        assert_eq!(ed.feed(&rel), Edit::Nothing);
        assert!(!is_press(&rel));
        assert_eq!(ed.feed(&code(KeyCode::Left)), Edit::Nothing);
        assert_eq!(ed.buffer(), "");
    }
}
