// Key predicates used by the terminal input helpers.
//
// Handlers ask "is this the submit key?" instead of matching raw crossterm
// events, so the line editor and the key poll agree on what Ctrl+C means.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

fn ctrl(ev: &KeyEvent, want: char) -> bool {
	ev.modifiers.contains(KeyModifiers::CONTROL)
		&& matches!(ev.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&want))
}

pub fn is_interrupt(ev: &KeyEvent) -> bool {
	ctrl(ev, 'c')
}

pub fn is_end_of_input(ev: &KeyEvent) -> bool {
	ctrl(ev, 'd')
}

pub fn is_enter(ev: &KeyEvent) -> bool {
	matches!(ev.code, KeyCode::Enter)
}

pub fn is_backspace(ev: &KeyEvent) -> bool {
	matches!(ev.code, KeyCode::Backspace)
}

/// A plain character to insert into the line buffer.
pub fn typed_char(ev: &KeyEvent) -> Option<char> {
	if ev
		.modifiers
		.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
	{
		return None;
	}
	match ev.code {
		KeyCode::Char(c) => Some(c),
		_ => None,
	}
}
