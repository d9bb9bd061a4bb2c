//! Parser errors

use std::{error, fmt};

use diagnostic::{Diagnostic, Span};

use crate::lexer::{self, Token};

/// The broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The raw text is malformed.
    Lex,
    /// The tokens aren't in a valid order.
    Parse,
    /// Valid syntax in a place it's not allowed. These can be skipped in
    /// permissive mode.
    IllegalEntry,
}

/// Everything that can go wrong turning IDL text into syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lexer(lexer::Error),

    EOFExpecting { wanted: String, span: Span },
    Unexpected { wanted: String, found: Token },

    NestedDoc(Span),
    UnclosedDoc(Span),
    RedundantDoc(Span),

    MissingTerminator(Span),
    UnclosedList(Span),
    MalformedField(Span),

    InvalidDeclarationStart(Span),
    InvalidEntryStart(Token),
    UnknownTag(Token),
    IllegalEntry(Token),

    MissingDescription { tag: String, span: Span },

    MissingPackage,
    DuplicatePackage(Span),
    MultipleInterfaces(Span),
    MissingInterface,

    UnusedInput(Span),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexer(_) => ErrorKind::Lex,
            Error::IllegalEntry(_) => ErrorKind::IllegalEntry,
            _ => ErrorKind::Parse,
        }
    }

    /// Is this error one that permissive mode can skip over?
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::IllegalEntry
    }

    /// The span of input that caused the error, if there is one.
    pub fn span(&self) -> Option<Span> {
        use Error::*;
        match self {
            Lexer(e) => Some(e.span()),

            EOFExpecting { span, .. } | MissingDescription { span, .. } => {
                Some(*span)
            }

            Unexpected { found: token, .. }
            | InvalidEntryStart(token)
            | UnknownTag(token)
            | IllegalEntry(token) => Some(token.span()),

            NestedDoc(span)
            | UnclosedDoc(span)
            | RedundantDoc(span)
            | MissingTerminator(span)
            | UnclosedList(span)
            | MalformedField(span)
            | InvalidDeclarationStart(span)
            | DuplicatePackage(span)
            | MultipleInterfaces(span)
            | UnusedInput(span) => Some(*span),

            MissingPackage | MissingInterface => None,
        }
    }

    /// A short note to put next to the highlighted input.
    fn note(&self) -> &'static str {
        use Error::*;
        match self {
            Lexer(_) => "starting here",
            EOFExpecting { .. } => "input ends after this",
            NestedDoc(_) => "this opens a second documentation comment",
            UnclosedDoc(_) | UnclosedList(_) => "opened here",
            RedundantDoc(_) => "only one documentation comment is allowed",
            IllegalEntry(_) => "this can't be documented",
            DuplicatePackage(_) => "second package statement",
            MultipleInterfaces(_) => "second interface",
            _ => "here",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            Lexer(e) => write!(f, "{}", e),

            EOFExpecting { wanted, .. } => {
                write!(f, "hit the end of input when expecting {}", wanted)
            }
            Unexpected { wanted, found } => {
                write!(f, "expected {} but found '{}'", wanted, found.value())
            }

            NestedDoc(_) => write!(f, "documentation comments can't be nested"),
            UnclosedDoc(_) => write!(f, "documentation comment is never closed"),
            RedundantDoc(_) => write!(
                f,
                "redundant documentation comment, only the last one would be used"
            ),

            MissingTerminator(_) => {
                write!(f, "declaration is missing a closing ';'")
            }
            UnclosedList(_) => write!(f, "list is never closed"),
            MalformedField(_) => write!(f, "malformed field"),

            InvalidDeclarationStart(_) => write!(
                f,
                "declarations must follow a documentation comment or an annotation"
            ),
            InvalidEntryStart(token) => {
                write!(f, "'{}' can't start a documented entry", token.value())
            }
            UnknownTag(token) => {
                write!(f, "unknown annotation '@{}'", token.value())
            }
            IllegalEntry(token) => write!(
                f,
                "'{}' statements can't be documented, the comment was ignored",
                token.value()
            ),

            MissingDescription { tag, .. } => {
                write!(f, "'@{}' is missing a description", tag)
            }

            MissingPackage => write!(f, "missing package statement"),
            DuplicatePackage(_) => write!(f, "more than one package statement"),
            MultipleInterfaces(_) => {
                write!(f, "more than one interface in an interface file")
            }
            MissingInterface => write!(f, "no interface in an interface file"),

            UnusedInput(_) => write!(f, "there was unused input when parsing"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Lexer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<lexer::Error> for Error {
    fn from(e: lexer::Error) -> Error {
        Error::Lexer(e)
    }
}

impl From<&Error> for Diagnostic {
    fn from(e: &Error) -> Diagnostic {
        let diagnostic = Diagnostic::new(e.to_string());

        match e.span() {
            Some(span) => diagnostic
                .location(span.start())
                .highlight(span, e.note()),
            None => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use diagnostic::{Caret, Level};

    use super::*;
    use crate::lexer::Grammar;

    #[test]
    fn kinds() {
        let span = Span::default();
        let token = Token::new(Grammar::Package, "package", span);

        assert_eq!(
            Error::from(lexer::Error::UnterminatedDoc(span)).kind(),
            ErrorKind::Lex
        );
        assert_eq!(Error::NestedDoc(span).kind(), ErrorKind::Parse);
        assert!(Error::IllegalEntry(token).is_recoverable());
        assert!(!Error::MissingPackage.is_recoverable());
    }

    #[test]
    fn into_diagnostic() {
        let span = Span::new(Caret::new(2, 0), Caret::new(2, 3));
        let e = Error::MalformedField(span);
        let d = Diagnostic::from(&e);

        assert_eq!(d.get_level(), Level::Error);
        assert_eq!(d.get_location(), Some(span.start()));
        assert_eq!(d.get_text(), "malformed field");
    }
}
