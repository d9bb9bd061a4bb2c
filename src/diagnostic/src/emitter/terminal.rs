//! Pretty printing of diagnostic messages.
//!
//! This module handles all the external libraries we need to do this (mostly)
//! right, and wraps them up in a single configurable printer.

use std::borrow::Cow;
use std::io::{Result, Write};

use term_size::dimensions_stderr;
use termcolor::{
    BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor,
};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

use crate::level::Level;
use crate::message::Message;
use crate::{Diagnostic, InputCoordinator};

use super::code_window::CodeWindow;
use super::line_art::LineArt;
use super::Emitter;

/// A printer for terminals.
pub struct FancyEmitter {
    /// Output stream.
    out: Box<dyn WriteColor>,
    /// The set of line art characters to use.
    line_art: LineArt,
    /// The max width of the output
    width: usize,
}

impl FancyEmitter {
    /// The default terminal width used if the actual terminal is below
    /// `MIN_WIDTH`.
    pub const DEFAULT_WIDTH: usize = 80;

    /// The narrowest allowed terminal size that things will be wrapped to, any
    /// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
    pub const MIN_WIDTH: usize = 40;

    /// Plain ASCII art and no colour, but still with code windows.
    pub fn simpler() -> Self {
        FancyEmitter {
            out: Box::new(BufferedStandardStream::stderr(ColorChoice::Never)),
            line_art: LineArt::ASCII,
            width: FancyEmitter::DEFAULT_WIDTH,
        }
    }

    /// Prints to stderr, using all the fancy features.
    pub fn full() -> Self {
        let width = match dimensions_stderr() {
            Some((w, _)) if w >= Self::MIN_WIDTH => w,
            _ => Self::DEFAULT_WIDTH,
        };

        FancyEmitter {
            out: Box::new(BufferedStandardStream::stderr(ColorChoice::Auto)),
            line_art: LineArt::UNICODE,
            width,
        }
    }

    /// The width of line-wrapped output.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// The line art used by the printer
    pub(crate) fn line_art(&self) -> LineArt {
        self.line_art
    }

    /// A handle on the output stream.
    pub(crate) fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    /// How wide is a string when printed?
    pub(crate) fn presentation_width(&self, s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Line wrapping for English text.
    pub(crate) fn wrap<'a>(&self, text: &'a str, width: usize) -> Vec<Cow<'a, str>> {
        textwrap::wrap(text, Options::new(width.max(1)))
    }

    /// Prints `len` number of the `padding` character.
    pub(crate) fn pad(&mut self, padding: char, len: usize) -> Result<()> {
        for _ in 0..len {
            write!(self.out, "{}", padding)?;
        }
        Ok(())
    }

    /// Set the output to print dimmed text.
    pub(crate) fn dim_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        self.out.set_color(&spec)
    }

    /// Set the output style to the style used for notes.
    pub(crate) fn note_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue));
        self.out.set_color(&spec)
    }

    /// Reset the printed style to the default.
    pub(crate) fn reset_spec(&mut self) -> Result<()> {
        self.out.reset()
    }

    /// Set the spec of the settings for this level.
    fn set_level_spec(&mut self, level: Level) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        let color = match level {
            Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
            Level::Info => Color::Cyan,
        };
        spec.set_fg(Some(color));
        self.out.set_color(&spec)
    }
}

impl Emitter for FancyEmitter {
    fn emit(&mut self, d: &Diagnostic, i: &InputCoordinator) -> Result<()> {
        self.emit_message(d.message())?;

        if let Some(id) = d.get_input() {
            let name = i.get_input_name(id).unwrap_or_default();
            let label = match d.get_location() {
                Some(l) => format!("{name}:{l}"),
                None => name,
            };

            match i.get_input_buffer(id) {
                Some(input) if !d.get_highlights().is_empty() => {
                    CodeWindow::new(d.get_highlights(), input).print(self, &label)?;
                }
                _ => {
                    let arrow = self.line_art().note;
                    writeln!(self.out(), "  {} {}", arrow, label)?;
                }
            }
        }

        self.out().flush()
    }
}

impl FancyEmitter {
    fn emit_message(&mut self, msg: &Message) -> Result<()> {
        // The coloured prefix also decides how much subsequent lines are
        // indented.
        let prefix_length = self.emit_message_level(msg)?;
        let wrap_width = self.width().saturating_sub(prefix_length);
        let lines = self.wrap(msg.text(), wrap_width);

        match lines.split_first() {
            None => writeln!(self.out())?,
            Some((first, rest)) => {
                writeln!(self.out(), "{}", first)?;
                for line in rest {
                    self.pad(' ', prefix_length)?;
                    writeln!(self.out(), "{}", line)?;
                }
            }
        }

        Ok(())
    }

    /// Emits the coloured prefix of the message, which is the level name with a
    /// `": "` at the end for spacing. This will set and reset the colour too.
    fn emit_message_level(&mut self, msg: &Message) -> Result<usize> {
        self.set_level_spec(msg.level())?;
        write!(self.out(), "{}: ", msg.level().name())?;
        self.reset_spec()?;
        Ok(msg.level().name().len() + ": ".len())
    }
}
