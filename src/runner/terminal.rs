use crossterm::cursor::{MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::time::Duration;

use crate::input::{self, Edit, KeyCode, KeyEvent, KeyModifiers, LineEditor, LineInput};
use crate::runner::interrupt;

/// Size used when the terminal cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 34);

/// The display surface and keyboard the hub talks to.
///
/// Every screen is a full `clear` + `write_screen`; nothing is buffered
/// between draws.
pub trait Console {
    /// `(columns, rows)` of the terminal, or a fallback.
    fn size(&self) -> (u16, u16);

    fn clear(&mut self) -> io::Result<()>;

    fn write_screen(&mut self, text: &str) -> io::Result<()>;

    /// Print `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> io::Result<LineInput>;

    /// Wait a short, bounded time for one key press.
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>>;

    /// Wait as long as it takes for any key.
    fn wait_for_key(&mut self) -> io::Result<()> {
        while self.poll_key()?.is_none() {}
        Ok(())
    }
}

/// Query the terminal size, falling back on error or a zero-sized answer.
pub fn terminal_size_or(fallback: (u16, u16)) -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((c, r)) if c > 0 && r > 0 => (c, r),
        Ok(_) => fallback,
        Err(e) => {
            tracing::debug!("terminal size query failed, using fallback: {}", e);
            fallback
        }
    }
}

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Console on the process's real terminal via crossterm.
///
/// When stdin is not a terminal (piped or closed) menu input is read line by
/// line from stdin instead of from raw key events.
pub struct CrosstermConsole {
    out: Stdout,
    fallback: (u16, u16),
    poll: Duration,
    piped: Option<Box<dyn BufRead>>,
}

impl CrosstermConsole {
    pub fn new(fallback: (u16, u16), poll: Duration) -> Self {
        let stdin = io::stdin();
        let piped: Option<Box<dyn BufRead>> = if stdin.is_terminal() {
            None
        } else {
            tracing::info!("stdin is not a terminal, reading menu input line by line");
            Some(Box::new(stdin.lock()))
        };
        CrosstermConsole {
            out: io::stdout(),
            fallback,
            poll,
            piped,
        }
    }
}

/// Read one line from non-terminal input. End of input reads as an
/// interrupt, like Ctrl+D on a terminal.
pub fn read_piped_line<B: BufRead + ?Sized>(input: &mut B) -> io::Result<LineInput> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(LineInput::Interrupted);
    }
    Ok(LineInput::Line(buf.trim().to_string()))
}

/// Run the line editor over keys from `next_key`, echoing to `out`.
///
/// `next_key` returns `None` when its poll timed out; the interrupt flag is
/// checked between polls so a SIGINT delivered outside raw mode still
/// cancels the read.
fn edit_line<K, W>(mut next_key: K, out: &mut W) -> io::Result<LineInput>
where
    K: FnMut() -> io::Result<Option<KeyEvent>>,
    W: Write,
{
    let mut editor = LineEditor::new();
    loop {
        if interrupt::take() {
            write!(out, "\r\n")?;
            out.flush()?;
            return Ok(LineInput::Interrupted);
        }
        let Some(key) = next_key()? else {
            continue;
        };
        match editor.feed(&key) {
            Edit::Echo(c) => write!(out, "{c}")?,
            Edit::Erase => write!(out, "\u{8} \u{8}")?,
            Edit::Done(line) => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(line);
            }
            Edit::Nothing => {}
        }
        out.flush()?;
    }
}

/// Poll `next_key` until a key arrives or an interrupt is flagged.
fn await_key<K>(mut next_key: K) -> io::Result<()>
where
    K: FnMut() -> io::Result<Option<KeyEvent>>,
{
    loop {
        if interrupt::take() || next_key()?.is_some() {
            return Ok(());
        }
    }
}

impl Console for CrosstermConsole {
    fn size(&self) -> (u16, u16) {
        terminal_size_or(self.fallback)
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_screen(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<LineInput> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        if let Some(lines) = self.piped.as_mut() {
            if interrupt::take() {
                return Ok(LineInput::Interrupted);
            }
            let line = read_piped_line(lines)?;
            writeln!(self.out)?;
            return Ok(line);
        }

        let _raw = RawMode::enable()?;
        let poll = self.poll;
        edit_line(|| input::poll_key(poll), &mut self.out)
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if let Some(lines) = self.piped.as_mut() {
            read_piped_line(lines)?;
            return Ok(Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        }
        let _raw = RawMode::enable()?;
        input::poll_key(self.poll)
    }

    /// On piped input a "key" is one whole line, or end of input.
    fn wait_for_key(&mut self) -> io::Result<()> {
        if let Some(lines) = self.piped.as_mut() {
            if !interrupt::take() {
                read_piped_line(lines)?;
            }
            return Ok(());
        }
        let _raw = RawMode::enable()?;
        let poll = self.poll;
        await_key(|| input::poll_key(poll))
    }
}

/// Put the terminal back into a usable state: cooked mode, visible cursor.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show)?;
    Ok(())
}

/// Restore the terminal before a panic message is printed, so the message
/// is readable and the shell is not left in raw mode.
pub fn install_panic_hook() {
    let default = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys(Vec<Option<KeyEvent>>);

    impl Console for Keys {
        fn size(&self) -> (u16, u16) {
            FALLBACK_SIZE
        }
        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn write_screen(&mut self, _text: &str) -> io::Result<()> {
            Ok(())
        }
        fn read_line(&mut self, _prompt: &str) -> io::Result<LineInput> {
            Ok(LineInput::Interrupted)
        }
        fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
            Ok(self.0.pop().flatten())
        }
    }

    #[test]
    fn wait_for_key_keeps_polling_until_a_key() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        // popped from the back: three empty polls, then the key
        let mut c = Keys(vec![Some(key), None, None, None]);
        c.wait_for_key().unwrap();
        assert!(c.0.is_empty());
    }

    #[test]
    fn piped_lines_are_trimmed_and_eof_interrupts() {
        let mut input = io::Cursor::new("  2 \nabc\n");
        assert_eq!(read_piped_line(&mut input).unwrap(), LineInput::Line("2".into()));
        assert_eq!(read_piped_line(&mut input).unwrap(), LineInput::Line("abc".into()));
        assert_eq!(read_piped_line(&mut input).unwrap(), LineInput::Interrupted);
        assert_eq!(read_piped_line(&mut io::empty()).unwrap(), LineInput::Interrupted);
    }

    #[test]
    fn edit_line_submits_typed_keys() {
        let _guard = interrupt::test_lock();
        interrupt::reset();
        let mut keys = vec![
            Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None,
            Some(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)),
        ];
        let mut out = Vec::new();
        let line = edit_line(|| Ok(keys.pop().flatten()), &mut out).unwrap();
        assert_eq!(line, LineInput::Line("7".into()));
        assert_eq!(out, b"7\r\n");
    }

    #[test]
    fn signal_flag_cancels_a_pending_line_read() {
        let _guard = interrupt::test_lock();
        interrupt::reset();
        let mut polls = 0;
        let mut out = Vec::new();
        let line = edit_line(
            || {
                polls += 1;
                if polls == 3 {
                    interrupt::raise();
                }
                Ok(None)
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(line, LineInput::Interrupted);
        assert_eq!(polls, 3);
        assert!(!interrupt::take());
    }

    #[test]
    fn signal_flag_ends_a_key_wait() {
        let _guard = interrupt::test_lock();
        interrupt::reset();
        interrupt::raise();
        await_key(|| panic!("flag is checked before polling")).unwrap();

        let mut keys = vec![Some(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)), None];
        await_key(|| Ok(keys.pop().flatten())).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn fallback_size_is_80_by_34() {
        assert_eq!(FALLBACK_SIZE, (80, 34));
    }
}
