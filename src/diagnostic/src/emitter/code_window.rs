//! Code windows are previews into the source code presented when displaying
//! diagnostic messages to help the user locate problems.

use std::io::Result;

use crate::{emitter::terminal::FancyEmitter, highlight::Highlight};

/// A preview into the source with the highlighted lines and their notes.
///
/// Token columns are measured on padded text, so the window shows whole
/// source lines and lists notes underneath instead of underlining columns.
#[derive(Debug)]
pub(crate) struct CodeWindow<'i, 'd> {
    highlights: &'d [Highlight],
    /// The line number and text of each line touched by a highlight.
    lines: Vec<(u32, &'i str)>,
}

impl<'i, 'd> CodeWindow<'i, 'd> {
    /// Create a window over `input` which keeps only the lines the
    /// highlights touch.
    pub fn new(highlights: &'d [Highlight], input: &'i str) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .map(|(n, line)| (n as u32, line))
            .filter(|(n, _)| highlights.iter().any(|h| h.span().lines().contains(n)))
            .collect();

        CodeWindow { highlights, lines }
    }

    pub(crate) fn print(&self, e: &mut FancyEmitter, label: &str) -> Result<()> {
        self.header(e, label)?;

        for (number, line) in &self.lines {
            self.gutter(e, number + 1)?;
            writeln!(e.out(), "{}", line)?;
        }

        for note in self.highlights.iter().filter_map(Highlight::note) {
            self.gutter(e, "")?;
            e.note_spec()?;
            let arrow = e.line_art().note;
            writeln!(e.out(), "{} {}", arrow, note)?;
            e.reset_spec()?;
        }

        writeln!(e.out())
    }

    /// Print a code window header with the right line art, right aligning the
    /// label.
    fn header(&self, e: &mut FancyEmitter, label: &str) -> Result<()> {
        let label_length = e.presentation_width(label);
        let code_width = self.code_width(e.width());

        // Copy these out since we'll need the &mut for getting `out`.
        let h = e.line_art().horizontal;
        let t = e.line_art().tee;

        e.dim_spec()?;
        e.pad(h, self.gutter_width())?;
        write!(e.out(), "{}", t)?;
        e.pad(h, code_width.saturating_sub(label_length + 1))?;
        e.reset_spec()?;

        writeln!(e.out(), " {}", label)
    }

    /// Print the gutter, right aligning `content` in it.
    fn gutter(&self, e: &mut FancyEmitter, content: impl std::fmt::Display) -> Result<()> {
        e.dim_spec()?;
        let vertical = e.line_art().vertical;
        write!(
            e.out(),
            "{: >gutter_width$}{} ",
            content,
            vertical,
            gutter_width = self.gutter_width()
        )?;
        e.reset_spec()
    }

    /// The width of the left column in the gutter, not including the vertical
    /// line or space after it.
    fn gutter_width(&self) -> usize {
        let last = self.lines.last().map(|(n, _)| n + 1).unwrap_or(1);
        last.to_string().len()
    }

    /// The width of the code window, which is the `max_width` minus the gutter
    /// and spacing needed for the border.
    fn code_width(&self, max_width: usize) -> usize {
        max_width.saturating_sub(self.gutter_width() + 2)
    }
}
