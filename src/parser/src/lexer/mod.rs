//! Lexing - converting input into [`Token`]s.
//!
//! Generally speaking you shouldn't need these directly, and can go straight to
//! using [`Parse::parse`][crate::Parse::parse] instead.
//!
//! Lexing happens in two steps. First the source is [`pad`]ded so that every
//! delimiter is surrounded by whitespace, then the [`Lexer`] splits the padded
//! text on whitespace and resolves each piece through the [`Grammar`] table.
//! The interior of each documentation block is handed off to a separate lexer
//! which knows about documentation tags and blank lines.

mod doc;
mod error;
mod padding;
mod scanner;
mod token;

use diagnostic::{Caret, Span};

use crate::lexer::{doc::DocLexer, scanner::Scanner};

pub use crate::lexer::{
    error::Error,
    padding::{pad, unpad, unpad_tokens},
    token::{is_identifier, Category, Grammar, Token},
};

/// Pad and lex some source text.
///
/// # Example
///
/// ```
/// # use parser::lexer::{tokenize, Grammar};
/// let tokens = tokenize("typedef int32_t Id;").unwrap();
/// assert_eq!(tokens[0].grammar(), Grammar::Typedef);
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(&pad(source)).tokens()
}

/// A [`Lexer`] scans over already-padded input, breaking it up into
/// [`Token`]s.
///
/// # Example
///
/// ```
/// # use parser::lexer::{pad, Lexer};
/// let padded = pad("enum Color : uint8_t {};");
/// let tokens = Lexer::new(&padded).tokens().unwrap();
/// assert_eq!(tokens.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    scanner: Scanner<'i>,
    tokens: Vec<Token>,
}

impl<'i> Lexer<'i> {
    /// Create a new lexer over some padded input.
    pub fn new(input: &'i str) -> Self {
        Lexer {
            scanner: Scanner::new(input, Caret::default()),
            tokens: Vec::new(),
        }
    }

    /// Lex all of the input.
    pub fn tokens(mut self) -> Result<Vec<Token>, Error> {
        while let Some((word, span)) = self.scanner.word() {
            self.token(word, span)?;
        }

        Ok(self.tokens)
    }

    fn token(&mut self, word: &'i str, span: Span) -> Result<(), Error> {
        match word {
            "//" => {
                self.scanner.rest_of_line();
            }
            "/**" => self.doc(span)?,
            "@" => self.annotation(span)?,
            _ if word.starts_with("/*") => self.block_comment(span)?,
            _ => self.push(Grammar::resolve(word), word, span),
        }

        Ok(())
    }

    fn push(&mut self, grammar: Grammar, value: impl Into<String>, span: Span) {
        self.tokens.push(Token::new(grammar, value, span));
    }

    /// Block comments are discarded, but must be closed.
    fn block_comment(&mut self, open: Span) -> Result<(), Error> {
        while let Some((word, _)) = self.scanner.word() {
            if word == Grammar::DocEnd.text() {
                return Ok(());
            }
        }

        Err(Error::UnterminatedComment(open))
    }

    /// An `@`, and if it's followed by an annotation tag the tag and any
    /// parenthesized argument list after it.
    ///
    /// The argument list is folded into the tag's token, so
    /// `@callflow(next={"a"})` is two tokens, the second with the value
    /// `callflow ( next = { "a" } )`.
    fn annotation(&mut self, at: Span) -> Result<(), Error> {
        self.push(Grammar::At, Grammar::At.text(), at);

        let tag = match self.scanner.peek_word().and_then(Grammar::annotation) {
            Some(tag) => tag,
            None => return Ok(()),
        };

        let (word, mut span) = match self.scanner.word() {
            Some(next) => next,
            None => return Ok(()),
        };

        let mut value = word.to_string();

        if self.scanner.peek_word() == Some(Grammar::ParenOpen.text()) {
            let mut depth = 0usize;

            loop {
                let (word, word_span) = self
                    .scanner
                    .word()
                    .ok_or(Error::UnterminatedAnnotation(at + span))?;

                value.push(' ');
                value.push_str(word);
                span = span + word_span;

                match Grammar::resolve(word) {
                    Grammar::ParenOpen => depth += 1,
                    Grammar::ParenClose => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }

        self.push(tag, value, span);
        Ok(())
    }

    /// A documentation block, from just after the `/**`.
    ///
    /// The block runs to the last `*/` on the first line which has one.
    fn doc(&mut self, open: Span) -> Result<(), Error> {
        self.push(Grammar::DocStart, Grammar::DocStart.text(), open);

        let start = self.scanner.location();
        let mut interior = String::new();

        loop {
            let line = self.scanner.peek_line();

            if let Some(index) = line.rfind(Grammar::DocEnd.text()) {
                let before = &line[..index];
                interior.push_str(before);
                self.scanner.advance_by(before.chars().count());

                let close_start = self.scanner.location();
                self.scanner.advance_by(Grammar::DocEnd.text().len());
                let close = Span::new(close_start, self.scanner.location());

                let after_start = self.scanner.location();
                if !self.scanner.rest_of_line().trim().is_empty() {
                    let after = Span::new(after_start, self.scanner.location());
                    return Err(Error::TextAfterClose(after));
                }

                self.tokens.extend(DocLexer::new(&interior, start).tokens());
                self.tokens.push(Token::synthesized(Grammar::DocEnd, close));
                return Ok(());
            }

            interior.push_str(self.scanner.rest_of_line());

            match self.scanner.advance() {
                Some(newline) => interior.push(newline),
                None => return Err(Error::UnterminatedDoc(open)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(source: &str) -> Vec<Grammar> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(Token::grammar)
            .collect()
    }

    #[test]
    fn line_comment() {
        assert_eq!(
            grammar("int32_t x; // a comment ; {\nfoo"),
            vec![
                Grammar::Int32,
                Grammar::Word,
                Grammar::Semicolon,
                Grammar::Word
            ]
        );
    }

    #[test]
    fn block_comment() {
        assert_eq!(grammar("a /* b\n c */ d"), vec![Grammar::Word, Grammar::Word]);
        assert_eq!(grammar("a /*b*/ d"), vec![Grammar::Word, Grammar::Word]);
        assert!(matches!(
            tokenize("a /* b"),
            Err(Error::UnterminatedComment(_))
        ));
    }

    #[test]
    fn annotation_folds_arguments() {
        let tokens = tokenize("@callflow(next={\"a\", \"b\"}) foo").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].grammar(), Grammar::At);
        assert_eq!(tokens[1].grammar(), Grammar::Callflow);
        assert_eq!(tokens[1].value(), "callflow ( next = { \"a\" , \"b\" } )");
        assert_eq!(tokens[2].value(), "foo");
    }

    #[test]
    fn annotation_without_arguments() {
        assert_eq!(
            grammar("@entry oneway"),
            vec![Grammar::At, Grammar::Entry, Grammar::Oneway]
        );
    }

    #[test]
    fn annotation_unknown_tag() {
        assert_eq!(grammar("@foo"), vec![Grammar::At, Grammar::Word]);
    }

    #[test]
    fn annotation_unterminated() {
        assert!(matches!(
            tokenize("@callflow(next"),
            Err(Error::UnterminatedAnnotation(_))
        ));
    }

    #[test]
    fn doc_block() {
        assert_eq!(
            grammar("/** Hi. */\nstruct"),
            vec![
                Grammar::DocStart,
                Grammar::DocWord,
                Grammar::DocWord,
                Grammar::DocEnd,
                Grammar::Struct,
            ]
        );
    }

    #[test]
    fn doc_text_after_close() {
        assert!(matches!(
            tokenize("/** doc */ struct"),
            Err(Error::TextAfterClose(_))
        ));
    }

    #[test]
    fn doc_unterminated() {
        assert!(matches!(
            tokenize("/** doc\n more"),
            Err(Error::UnterminatedDoc(_))
        ));
    }

    #[test]
    fn doc_last_close_counts() {
        assert_eq!(
            grammar("/** a /** b */ */"),
            vec![
                Grammar::DocStart,
                Grammar::DocWord,
                Grammar::DocStart,
                Grammar::DocWord,
                Grammar::DocEnd,
                Grammar::DocEnd,
            ]
        );
    }

    #[test]
    fn lines_match_source() {
        let tokens = tokenize("package a@1.0;\n\nstruct S {};").unwrap();
        let structure = tokens.iter().find(|t| t.is(Grammar::Struct)).unwrap();
        assert_eq!(structure.span().start().line(), 2);
    }
}
