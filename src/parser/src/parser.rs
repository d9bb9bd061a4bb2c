//! A cursor over a token slice.
//!
//! See the [module documentation][crate] for more information on how this all
//! fits together, and how to use it.

use diagnostic::{Diagnostic, Level, Span};

use crate::{
    error::Error,
    lexer::{Grammar, Token},
    options::Options,
    Parse,
};

/// A Parser is a cursor over a slice of tokens, with tools for finding the
/// span of tokens a piece of syntax covers.
///
/// Each piece of syntax is parsed in two steps: first the outer parser scans
/// over the tokens it covers, then a fresh child parser over just those
/// tokens builds the node. See [`Parse`].
#[derive(Debug)]
pub struct Parser<'t> {
    /// The tokens from our input.
    tokens: &'t [Token],

    /// The cursor is the index into the `tokens` which tracks where we've parsed to.
    cursor: usize,

    options: Options,

    /// Warnings collected while parsing, including those from child parsers.
    warnings: Vec<Diagnostic>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], options: Options) -> Parser<'t> {
        Parser {
            tokens,
            cursor: 0,
            options,
            warnings: Vec::new(),
        }
    }

    /// Consume input to produce the specified piece of [`Parse`]able syntax.
    ///
    /// # Note
    ///
    /// Generally you'll want to use [`Parse::parse`] instead, as it ensures
    /// that all input is consumed. This method is instead used for _making_
    /// parsers.
    pub fn parse<T: Parse>(&mut self) -> Result<T, Error> {
        T::parse_with(self)
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Has the parser consumed all of the input?
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The tokens that haven't been consumed.
    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.cursor.min(self.tokens.len())..]
    }

    /// Returns the [`Grammar`] of the next token, without consuming it.
    pub fn peek(&self) -> Option<Grammar> {
        self.peek_nth(0)
    }

    /// Like `Parser::peek` but looking ahead `n` tokens instead of just one.
    ///
    /// Note that this means `peek_nth(0)` is like `peek`.
    pub fn peek_nth(&self, n: usize) -> Option<Grammar> {
        self.tokens.get(self.cursor + n).map(Token::grammar)
    }

    /// The whole next token, without consuming it.
    pub fn peek_token(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    /// The token right before the cursor.
    pub fn previous(&self) -> Option<&'t Token> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
    }

    /// Consume the next token, whatever it is.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Consume the next token if it's the [`Grammar`] symbol we wanted.
    ///
    /// See [`Parser::consume_if`] for more complicated matching.
    pub fn consume(&mut self, wanted: Grammar) -> Result<&'t Token, Error> {
        self.consume_if(|t| t.is(wanted), &wanted.name())
    }

    /// Consume the next token if it satisfies the predicate provided. If the
    /// next token doesn't, the error mentions what we were looking for using
    /// `name`.
    pub fn consume_if(
        &mut self,
        predicate: impl Fn(&Token) -> bool,
        name: &str,
    ) -> Result<&'t Token, Error> {
        match self.tokens.get(self.cursor) {
            Some(found) if predicate(found) => {
                self.cursor += 1;
                Ok(found)
            }
            Some(found) => Err(Error::Unexpected {
                wanted: name.to_string(),
                found: found.clone(),
            }),
            None => Err(self.eof(name)),
        }
    }

    /// The error for running out of input when looking for `wanted`.
    pub fn eof(&self, wanted: &str) -> Error {
        Error::EOFExpecting {
            wanted: wanted.to_string(),
            span: self.last_span(),
        }
    }

    /// The span of the last token, or an empty span if there are none.
    pub fn last_span(&self) -> Span {
        self.tokens.last().map(Token::span).unwrap_or_default()
    }

    /// Record where the cursor is, to come back with [`Parser::reset`].
    pub fn mark(&self) -> usize {
        self.cursor
    }

    /// Rewind (or wind) the cursor to a previous [`Parser::mark`].
    pub fn reset(&mut self, mark: usize) {
        self.cursor = mark.min(self.tokens.len());
    }

    /// The tokens consumed since `mark`.
    pub fn span_since(&self, mark: usize) -> &'t [Token] {
        &self.tokens[mark.min(self.cursor)..self.cursor]
    }

    /// Run `f` over a child parser on just the tokens in `span`. The child's
    /// warnings are kept, even if `f` fails.
    pub fn nested<T>(
        &mut self,
        span: &'t [Token],
        f: impl FnOnce(&mut Parser<'t>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut child = Parser::new(span, self.options);
        let result = f(&mut child);
        self.warnings.append(&mut child.warnings);
        result
    }

    /// Record a warning.
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic.level(Level::Warning));
    }

    /// Hand over the warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    /// Fail if there's any input left.
    pub fn expect_empty(&self) -> Result<(), Error> {
        match self.peek_token() {
            None => Ok(()),
            Some(token) => Err(Error::UnusedInput(token.span())),
        }
    }
}

// Scanning helpers
impl<'t> Parser<'t> {
    /// Consume a whole documentation block, from `/**` through `*/`.
    ///
    /// Blank lines before the block are skipped.
    pub fn scan_doc_span(&mut self) -> Result<&'t [Token], Error> {
        while self.peek() == Some(Grammar::EmptyLine) {
            self.cursor += 1;
        }

        let start = self.mark();
        let open = self.consume(Grammar::DocStart)?;

        loop {
            match self.advance() {
                Some(t) if t.is(Grammar::DocStart) => {
                    return Err(Error::NestedDoc(t.span()))
                }
                Some(t) if t.is(Grammar::DocEnd) => break,
                Some(_) => {}
                None => return Err(Error::UnclosedDoc(open.span())),
            }
        }

        Ok(self.span_since(start))
    }

    /// Consume everything through the next `;` that's not inside braces or a
    /// documentation block.
    ///
    /// ```
    /// # use parser::{lexer::tokenize, Options, Parser};
    /// let tokens = tokenize("struct S { int8_t a; }; next").unwrap();
    /// let mut parser = Parser::new(&tokens, Options::default());
    /// let span = parser.scan_declaration_span().unwrap();
    /// assert_eq!(span.len(), 8);
    /// ```
    pub fn scan_declaration_span(&mut self) -> Result<&'t [Token], Error> {
        let start = self.mark();
        let mut depth = 0usize;
        let mut in_doc = false;

        while let Some(token) = self.advance() {
            match token.grammar() {
                Grammar::DocStart => in_doc = true,
                Grammar::DocEnd => in_doc = false,
                _ if in_doc => {}
                Grammar::BraceOpen => depth += 1,
                Grammar::BraceClose => depth = depth.saturating_sub(1),
                Grammar::Semicolon if depth == 0 => {
                    return Ok(self.span_since(start));
                }
                _ => {}
            }
        }

        let consumed = self.span_since(start);
        let span = match (consumed.first(), consumed.last()) {
            (Some(first), Some(last)) => first.span() + last.span(),
            _ => self.last_span(),
        };

        Err(Error::MissingTerminator(span))
    }

    /// Split a list like `(a, b, c)` into the tokens of each field.
    ///
    /// Nested lists using the same `open` and `close` are kept whole, and
    /// documentation blocks are never split. Empty fields, like the one after
    /// a trailing separator, are dropped.
    pub fn scan_delimited_list(
        &mut self,
        open: Grammar,
        close: Grammar,
        sep: Grammar,
    ) -> Result<Vec<&'t [Token]>, Error> {
        let opener = self.consume(open)?;

        let mut fields = Vec::new();
        let mut field_start = self.mark();
        let mut depth = 0usize;
        let mut in_doc = false;

        loop {
            let token = self
                .advance()
                .ok_or(Error::UnclosedList(opener.span()))?;
            let g = token.grammar();

            if g == Grammar::DocStart {
                in_doc = true;
            } else if g == Grammar::DocEnd {
                in_doc = false;
            } else if in_doc {
                continue;
            } else if g == open {
                depth += 1;
            } else if g == close && depth > 0 {
                depth -= 1;
            } else if (g == close || g == sep) && depth == 0 {
                let field = &self.tokens[field_start..self.cursor - 1];
                if !field.is_empty() {
                    fields.push(field);
                }

                if g == close {
                    return Ok(fields);
                }

                field_start = self.mark();
            }
        }
    }
}
