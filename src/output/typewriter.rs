//! Paced text output
//!
//! Prompts and commentary in the line-based mode are typed out at about
//! 150 characters per second with a short pause after punctuation. Output
//! that is not going to a terminal, or `--fast`, prints at once.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

const CHARS_PER_SECOND: u64 = 150;
const PUNCTUATION_PAUSE: Duration = Duration::from_millis(100);

/// Delay after writing `ch`
#[must_use]
pub fn pause_for(ch: char) -> Duration {
    match ch {
        '.' | '!' | '?' | ',' | ';' | ':' | '–' | '—' => PUNCTUATION_PAUSE,
        _ => Duration::from_micros(1_000_000 / CHARS_PER_SECOND),
    }
}

/// Stdout printer with optional pacing
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    paced: bool,
}

impl Printer {
    /// Paced only when `fast` is off and stdout is a terminal
    #[must_use]
    pub fn new(fast: bool) -> Self {
        Self {
            paced: !fast && io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn instant() -> Self {
        Self { paced: false }
    }

    #[must_use]
    pub const fn is_paced(self) -> bool {
        self.paced
    }

    /// Write `text` to `out`, pausing between characters when paced
    ///
    /// # Errors
    /// Returns any error from the writer.
    pub fn write_to<W: Write>(self, out: &mut W, text: &str) -> io::Result<()> {
        if !self.paced {
            out.write_all(text.as_bytes())?;
            return out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            thread::sleep(pause_for(ch));
        }
        Ok(())
    }

    /// Print a line to stdout
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written.
    pub fn say(self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, text)?;
        self.write_to(&mut stdout, "\n")
    }
}
