//! Line-oriented terminal access.

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument};

/// Everything the game needs from a terminal.
pub trait Console {
    /// Replaces whatever is on screen with `frame`.
    fn show(&mut self, frame: &str) -> Result<()>;

    /// Prints one line below the current frame.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Prints `prompt` and reads one line of input, without the newline.
    ///
    /// Fails once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Blocks for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// [`Console`] over any reader and writer, usually stdin and stdout.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console; `clear_screen` wipes the terminal before each frame.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn show(&mut self, frame: &str) -> Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.output, "{}", frame)?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            bail!("Input closed");
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(answer = %answer, "Read input");
        Ok(answer)
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_newline() {
        let mut console = TerminalConsole::new(Cursor::new("Ada\r\n"), Vec::new(), false);
        assert_eq!(console.ask("Name: ").unwrap(), "Ada");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn test_ask_fails_on_eof() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new(), false);
        assert!(console.ask("Name: ").is_err());
    }

    #[test]
    fn test_show_clears_when_asked() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new(), true);
        console.show("frame").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with("\u{1b}["));
        assert!(out.ends_with("frame\n"));
    }
}
