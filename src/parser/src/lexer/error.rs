//! Lexer errors

use std::{error, fmt};

use diagnostic::Span;

/// Lexical errors. These are always fatal for the file being lexed.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A `/*` comment with no `*/` after it.
    UnterminatedComment(Span),

    /// An annotation's argument list with no closing `)`.
    UnterminatedAnnotation(Span),

    /// A `/**` block with no `*/` after it.
    UnterminatedDoc(Span),

    /// Something other than whitespace after a documentation block's `*/` on
    /// the same line.
    TextAfterClose(Span),
}

impl Error {
    /// Where in the (padded) input the error was found.
    pub fn span(&self) -> Span {
        match self {
            Error::UnterminatedComment(span)
            | Error::UnterminatedAnnotation(span)
            | Error::UnterminatedDoc(span)
            | Error::TextAfterClose(span) => *span,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnterminatedComment(_) => write!(f, "unterminated comment"),
            Error::UnterminatedAnnotation(_) => {
                write!(f, "unterminated annotation, missing a ')'")
            }
            Error::UnterminatedDoc(_) => {
                write!(f, "unterminated documentation comment")
            }
            Error::TextAfterClose(_) => write!(
                f,
                "text after the close of a documentation comment on the same line"
            ),
        }
    }
}

impl error::Error for Error {}
