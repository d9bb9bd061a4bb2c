//! The lexer for the interior of documentation blocks.

use diagnostic::{Caret, Span};

use crate::lexer::{scanner::Scanner, Grammar, Token};

/// Lexes the text between a `/**` and its `*/`.
///
/// Everything here is prose except for documentation tags like `@param`, and
/// stray block markers which are kept so nesting can be reported.
#[derive(Debug)]
pub(crate) struct DocLexer<'i> {
    text: &'i str,
    start: Caret,
}

impl<'i> DocLexer<'i> {
    /// A lexer over `text`, which starts at `start` in the padded input.
    pub fn new(text: &'i str, start: Caret) -> Self {
        DocLexer { text, start }
    }

    pub fn tokens(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let last = self.text.split('\n').count() - 1;

        for (i, line) in self.text.split('\n').enumerate() {
            let location = if i == 0 {
                self.start
            } else {
                Caret::new(self.start.line() + i as u32, 0)
            };

            let mut scanner = Scanner::new(line, location);
            strip_margin(&mut scanner);

            // The partial lines holding the markers aren't paragraph breaks.
            if scanner.remaining().trim().is_empty() {
                if i != 0 && i != last {
                    let here = scanner.location();
                    tokens.push(Token::synthesized(
                        Grammar::EmptyLine,
                        Span::new(here, here),
                    ));
                }
                continue;
            }

            while let Some((word, span)) = scanner.word() {
                match word {
                    "@" => match scanner.peek_word().and_then(Grammar::doc_annotation) {
                        Some(tag) => {
                            tokens.push(Token::new(Grammar::At, word, span));
                            if let Some((word, span)) = scanner.word() {
                                tokens.push(Token::new(tag, word, span));
                            }
                        }
                        None => tokens.push(Token::new(Grammar::DocWord, word, span)),
                    },
                    "/**" => tokens.push(Token::new(Grammar::DocStart, word, span)),
                    "*/" => tokens.push(Token::new(Grammar::DocEnd, word, span)),
                    _ => tokens.push(Token::new(Grammar::DocWord, word, span)),
                }
            }
        }

        tokens
    }
}

/// Skip leading whitespace and one `*` continuation marker.
fn strip_margin(scanner: &mut Scanner) {
    scanner.consume_while(|c| c.is_whitespace());

    let rest = scanner.remaining();
    if rest.starts_with('*') && !rest.starts_with(Grammar::DocEnd.text()) {
        scanner.advance();
    }
}
