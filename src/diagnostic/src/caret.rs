//! Caret
//!
//! A [`Caret`] is a line and column number in plain text, i.e. where a caret is
//! in the source text.

use std::fmt;

/// A location in some IDL input.
///
/// Carets are zero-indexed, with the caret before the first character. The
/// lexer works over delimiter-padded text, and padding only ever inserts
/// spaces inside a line, so `line` always matches the source file while
/// `column` counts characters of the padded line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    line: u32,
    column: u32,
}

impl Caret {
    /// Create a new [`Caret`], from a line and column number. These are
    /// 0-indexed.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The line the caret is on.
    pub fn line(self) -> u32 {
        self.line
    }

    /// The column of the caret.
    pub fn column(self) -> u32 {
        self.column
    }

    /// Move the caret over a character. A `\n` starts a new line and resets
    /// the column, anything else moves one column to the right.
    ///
    /// Columns count [`char`]s, not bytes or graphemes.
    pub fn increment(&mut self, c: char) {
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn caret_order() {
        let l = Caret::new(2, 200);
        let r = Caret::new(10, 100);
        assert!(l < r);
    }

    #[test]
    fn caret_newline_resets_column() {
        let mut caret = Caret::default();
        for c in "ab\ncd".chars() {
            caret.increment(c);
        }
        assert_eq!(caret, Caret::new(1, 2));
    }

    #[test]
    fn caret_display_is_one_indexed() {
        assert_eq!(Caret::new(0, 0).to_string(), "1:1");
    }
}
