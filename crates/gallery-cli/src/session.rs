//! The interactive menu loop.
//!
//! A [`Session`] owns the [`Gallery`] and the input/output handles. Each turn
//! prints the menu, reads a choice, runs exactly one gallery operation and
//! prints its outcome. Reported outcomes (not found, empty, bad input) keep
//! the loop going; I/O errors and allocation failure end it with an error.

use std::io::{self, BufRead, Read, Write};
use std::ops::ControlFlow;

use gallery_core::{Direction, Gallery};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::menu::MenuChoice;
use crate::render::{self, Painter};

/// Shortest line a prompt will read, whatever the name limit.
const MIN_LINE_BYTES: usize = 64;

/// Presentation settings for a session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub painter: Painter,
}

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose "Exit".
    Exited,
    /// Input closed before the user chose "Exit".
    EndOfInput,
}

pub struct Session<R, W> {
    gallery: Gallery,
    input: R,
    output: W,
    format: OutputFormat,
    painter: Painter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(gallery: Gallery, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            gallery,
            input,
            output,
            format: options.format,
            painter: options.painter,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Gallery, W) {
        (self.gallery, self.output)
    }

    /// Run turns until the user exits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        info!(config = ?self.gallery.config(), color = self.painter.is_colored(), "session started");
        loop {
            if let ControlFlow::Break(outcome) = self.turn()? {
                info!(?outcome, photos = self.gallery.len(), "session finished");
                return Ok(outcome);
            }
        }
    }

    fn turn(&mut self) -> anyhow::Result<ControlFlow<Outcome>> {
        let Some(line) = self.prompt(&format!("{}{}", render::MENU, render::CHOICE_PROMPT))? else {
            return self.end_of_input();
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(err) => {
                debug!(input = err.input(), "rejected menu input");
                writeln!(self.output, "{}", self.painter.failure(&err.to_string()))?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        match choice {
            MenuChoice::Insert => {
                let Some(name) = self.prompt(render::INSERT_PROMPT)? else {
                    return self.end_of_input();
                };
                self.insert(&name)?;
            }
            MenuChoice::Delete => {
                let Some(name) = self.prompt(render::DELETE_PROMPT)? else {
                    return self.end_of_input();
                };
                self.delete(&name)?;
            }
            MenuChoice::Display => self.display()?,
            MenuChoice::Next => self.step(Direction::Next)?,
            MenuChoice::Previous => self.step(Direction::Previous)?,
            MenuChoice::Exit => {
                writeln!(self.output, "{}", render::EXITING)?;
                return Ok(ControlFlow::Break(Outcome::Exited));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn insert(&mut self, name: &str) -> anyhow::Result<()> {
        // Only allocation failure can get here as an error; it is fatal.
        let entry = self.gallery.insert(name)?;
        writeln!(self.output, "{}", self.painter.success(&render::added(entry.name())))?;
        Ok(())
    }

    fn delete(&mut self, name: &str) -> anyhow::Result<()> {
        let line = match self.gallery.delete(name) {
            Ok(removed) => self.painter.success(&render::deleted(removed.name())),
            Err(err) if err.is_recoverable() => self.painter.failure(&render::report(&err)),
            Err(err) => return Err(err.into()),
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn display(&mut self) -> anyhow::Result<()> {
        let listing = render::listing(&self.gallery, self.format)?;
        if self.gallery.is_empty() && self.format == OutputFormat::Text {
            writeln!(self.output, "{}", self.painter.notice(&listing))?;
        } else {
            writeln!(self.output, "{listing}")?;
        }
        Ok(())
    }

    fn step(&mut self, direction: Direction) -> anyhow::Result<()> {
        let line = match self.gallery.step(direction) {
            Ok(name) => self.painter.viewing(&render::now_viewing(name)),
            Err(err) if err.is_recoverable() => self.painter.notice(&render::report(&err)),
            Err(err) => return Err(err.into()),
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn end_of_input(&mut self) -> anyhow::Result<ControlFlow<Outcome>> {
        writeln!(self.output)?;
        Ok(ControlFlow::Break(Outcome::EndOfInput))
    }

    /// Print `text`, then read one line without its line ending.
    ///
    /// At most [`line_limit`](Self::line_limit) bytes are kept; the rest of
    /// an over-long line is skipped without being buffered. Returns `None`
    /// once input is exhausted. Invalid UTF-8 is replaced rather than
    /// rejected.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let limit = self.line_limit();
        let mut buf = Vec::new();
        if (&mut self.input).take(limit).read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else {
            let skipped = self.skip_line()?;
            if skipped > 0 {
                debug!(kept = buf.len(), skipped, "long input line cut short");
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Enough bytes for `max_name_chars` four-byte characters plus `\r\n`.
    fn line_limit(&self) -> u64 {
        let bytes = self
            .gallery
            .config()
            .max_name_chars
            .saturating_mul(4)
            .saturating_add(2)
            .max(MIN_LINE_BYTES);
        u64::try_from(bytes).unwrap_or(u64::MAX)
    }

    /// Consume input up to and including the next newline. Returns the
    /// number of bytes dropped.
    fn skip_line(&mut self) -> io::Result<usize> {
        let mut skipped = 0;
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(skipped);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    self.input.consume(end + 1);
                    return Ok(skipped + end + 1);
                }
                None => {
                    let len = available.len();
                    self.input.consume(len);
                    skipped += len;
                }
            }
        }
    }
}
