// src/ui/clipboard.rs
// Clipboard access through the terminal (OSC 52)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{IsTerminal, Write};
use tracing::debug;

use crate::error::{LetterError, Result};

/// Destination for "Copy Letter"
pub trait Clipboard {
    /// Replace the clipboard contents with exactly `text`
    fn set(&mut self, text: &str) -> Result<()>;
}

/// Writes OSC 52 set-clipboard sequences to a terminal.
///
/// The text is base64-encoded, so newlines and non-ASCII survive unchanged.
/// Terminals without OSC 52 support ignore the sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set(&mut self, text: &str) -> Result<()> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Standard stream carrying the OSC 52 sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStream {
    Stdout,
    Stderr,
}

/// Prefer stdout, fall back to stderr. A stream that is not a terminal
/// (pipe or file) is never written to.
pub fn pick_stream(stdout_is_tty: bool, stderr_is_tty: bool) -> Option<TerminalStream> {
    if stdout_is_tty {
        Some(TerminalStream::Stdout)
    } else if stderr_is_tty {
        Some(TerminalStream::Stderr)
    } else {
        None
    }
}

/// OSC 52 clipboard on whichever standard stream is a terminal.
///
/// The stream is chosen on every copy. With both streams redirected the
/// copy fails with [`LetterError::NoTerminal`] and nothing is written.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl TerminalClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for TerminalClipboard {
    fn set(&mut self, text: &str) -> Result<()> {
        let stream = pick_stream(
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
        )
        .ok_or(LetterError::NoTerminal)?;
        debug!(stream = ?stream, "Writing OSC 52 sequence");
        match stream {
            TerminalStream::Stdout => Osc52Clipboard::new(std::io::stdout()).set(text),
            TerminalStream::Stderr => Osc52Clipboard::new(std::io::stderr()).set(text),
        }
    }
}
