//! Secret input without echo.
//!
//! When stdin is a terminal, `SecretPrompt::acquire` puts it in raw mode
//! through an `EchoGuard` and secrets are assembled from crossterm key
//! events, so typed characters never reach the screen.  The guard leaves
//! raw mode when dropped, on success and error paths alike.  In raw mode
//! Ctrl-C arrives as a key event and cancels the prompt through the normal
//! error path instead of killing the process.
//!
//! When stdin is not a terminal (piped input, tests) no guard is taken and
//! each secret is one line of input.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

// ---------------------------------------------------------------------------
// EchoGuard
// ---------------------------------------------------------------------------

/// Holds the terminal in raw, no-echo mode until dropped.
pub struct EchoGuard {
    _private: (),
}

impl EchoGuard {
    /// Enter raw mode.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().map_err(VaultError::Terminal)?;
        Ok(Self { _private: () })
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

// ---------------------------------------------------------------------------
// SecretPrompt
// ---------------------------------------------------------------------------

/// Reads secrets from stdin, hiding them when stdin is a terminal.
pub struct SecretPrompt {
    guard: Option<EchoGuard>,
}

impl SecretPrompt {
    /// Enter raw mode if stdin is a terminal.
    pub fn acquire() -> Result<Self> {
        let guard = if io::stdin().is_terminal() {
            Some(EchoGuard::acquire()?)
        } else {
            None
        };
        Ok(Self { guard })
    }

    /// Returns `true` while the terminal is held in raw mode.
    pub fn is_raw(&self) -> bool {
        self.guard.is_some()
    }

    /// Print `prompt` on stderr and read one secret.
    pub fn read_secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}: ").map_err(VaultError::Terminal)?;
        stderr.flush().map_err(VaultError::Terminal)?;

        let secret = if self.is_raw() {
            let secret = read_key_secret();
            // Raw mode turns off output processing, so return the carriage too.
            let _ = write!(stderr, "\r\n");
            secret
        } else {
            read_line_secret(&mut io::stdin().lock())
        };

        secret.map_err(VaultError::Terminal)
    }

    /// Leave raw mode now instead of waiting for drop.
    pub fn release(self) {}
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// What a key press does to the secret being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Submit,
    Cancel,
    EndOfInput,
}

/// Apply one key event to `buf`.
///
/// Enter submits, Backspace erases the last character, Ctrl-C cancels and
/// Ctrl-D on an empty secret ends the input.  Key releases are ignored.
pub fn apply_key(buf: &mut String, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Char('c') if ctrl => KeyAction::Cancel,
        KeyCode::Char('d') if ctrl && buf.is_empty() => KeyAction::EndOfInput,
        KeyCode::Char(_) if ctrl => KeyAction::Continue,
        KeyCode::Char(c) => {
            buf.push(c);
            KeyAction::Continue
        }
        KeyCode::Backspace => {
            buf.pop();
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

/// Read a secret from terminal key events (raw mode must be active).
fn read_key_secret() -> io::Result<Zeroizing<String>> {
    let mut buf = Zeroizing::new(String::new());

    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut buf, key) {
                KeyAction::Continue => {}
                KeyAction::Submit => return Ok(buf),
                KeyAction::Cancel => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "input cancelled"))
                }
                KeyAction::EndOfInput => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "no input on stdin",
                    ))
                }
            }
        }
    }
}

/// Read a secret as one line of piped input, without its line ending.
pub fn read_line_secret<R: BufRead>(input: &mut R) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input on stdin",
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_keys(keys: &[KeyEvent]) -> (String, KeyAction) {
        let mut buf = String::new();
        let mut last = KeyAction::Continue;
        for k in keys {
            last = apply_key(&mut buf, *k);
            if last != KeyAction::Continue {
                break;
            }
        }
        (buf, last)
    }

    #[test]
    fn enter_submits_typed_characters() {
        let keys: Vec<KeyEvent> = "hunter2"
            .chars()
            .map(|c| key(KeyCode::Char(c)))
            .chain([key(KeyCode::Enter)])
            .collect();
        assert_eq!(type_keys(&keys), ("hunter2".to_string(), KeyAction::Submit));
    }

    #[test]
    fn backspace_removes_whole_character() {
        let keys = [
            key(KeyCode::Char('p')),
            key(KeyCode::Char('é')),
            key(KeyCode::Backspace),
            key(KeyCode::Char('a')),
            key(KeyCode::Enter),
        ];
        assert_eq!(type_keys(&keys), ("pa".to_string(), KeyAction::Submit));
    }

    #[test]
    fn backspace_on_empty_secret_is_harmless() {
        let keys = [key(KeyCode::Backspace), key(KeyCode::Enter)];
        assert_eq!(type_keys(&keys), (String::new(), KeyAction::Submit));
    }

    #[test]
    fn ctrl_c_cancels() {
        let keys = [key(KeyCode::Char('a')), ctrl('c')];
        assert_eq!(type_keys(&keys).1, KeyAction::Cancel);
    }

    #[test]
    fn ctrl_d_ends_input_only_when_empty() {
        assert_eq!(type_keys(&[ctrl('d')]).1, KeyAction::EndOfInput);

        let keys = [key(KeyCode::Char('a')), ctrl('d'), key(KeyCode::Enter)];
        assert_eq!(type_keys(&keys), ("a".to_string(), KeyAction::Submit));
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut buf = String::new();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(apply_key(&mut buf, release), KeyAction::Continue);
        assert!(buf.is_empty());
    }

    #[test]
    fn line_input_strips_line_endings() {
        let mut input = Cursor::new(b"first\r\nsecond\n".to_vec());
        assert_eq!(read_line_secret(&mut input).unwrap().as_str(), "first");
        assert_eq!(read_line_secret(&mut input).unwrap().as_str(), "second");
    }

    #[test]
    fn line_input_without_newline_is_accepted() {
        let mut input = Cursor::new(b"last".to_vec());
        assert_eq!(read_line_secret(&mut input).unwrap().as_str(), "last");
    }

    #[test]
    fn line_input_at_eof_fails() {
        let mut input = Cursor::new(Vec::new());
        let err = read_line_secret(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let err = read_line_secret(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
