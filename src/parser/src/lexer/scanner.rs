//! A character-level cursor over lexer input.

use diagnostic::{Caret, Span};

/// Scans over a `&str` character by character, keeping track of both the byte
/// offset and the [`Caret`] of where it is.
///
/// A scanner can start part way through a larger input, which is how
/// documentation blocks get their own lexer without losing track of where
/// they are in the file.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'i> {
    /// The input being consumed, as utf8
    input: &'i str,

    /// The location of the caret, as a line and column
    location: Caret,

    /// The location of the caret, as a byte offset
    offset: usize,
}

impl<'i> Scanner<'i> {
    pub fn new(input: &'i str, location: Caret) -> Self {
        Scanner {
            input,
            location,
            offset: 0,
        }
    }

    pub fn location(&self) -> Caret {
        self.location
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The input which hasn't been scanned yet.
    pub fn remaining(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Move past the next character, returning it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.location.increment(c);
        Some(c)
    }

    /// Advance over `n` characters, or as many as there are.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while they match the predicate, returning the
    /// consumed slice.
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'i str {
        let start = self.offset;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }

        &self.input[start..self.offset]
    }

    pub fn whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// Skip whitespace and consume the next run of non-whitespace characters.
    pub fn word(&mut self) -> Option<(&'i str, Span)> {
        self.whitespace();
        let start = self.location;
        let word = self.consume_while(|c| !c.is_whitespace());

        if word.is_empty() {
            None
        } else {
            Some((word, Span::new(start, self.location)))
        }
    }

    /// The next word, without consuming it.
    pub fn peek_word(&self) -> Option<&'i str> {
        self.clone().word().map(|(word, _)| word)
    }

    /// The rest of the current line, without consuming it or the newline.
    pub fn peek_line(&self) -> &'i str {
        let rest = self.remaining();
        match rest.find('\n') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Consume the rest of the current line, but not the newline.
    pub fn rest_of_line(&mut self) -> &'i str {
        self.consume_while(|c| c != '\n')
    }
}
