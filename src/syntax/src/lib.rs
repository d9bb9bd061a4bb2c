//! Syntax for IDL files.
//!
//! Every node here implements [`Parse`], so parsing can start anywhere in the
//! grammar. Parsing a whole file is done with [`IdlFile::parse_source`],
//! which also hands back any warnings.
//!
//! Only documented declarations are of interest. An IDL file is treated as a
//! sequence of [`Entry`]s, each a documentation comment, some annotations and
//! a [`Declaration`]. Everything between entries is skipped, except for the
//! package and import statements.

use diagnostic::Span;

use parser::{
    lexer::{Category, Grammar},
    Error, Parse, Parser, Token,
};

mod annotation;
mod declaration;
mod doc;
mod entry;
mod file;
mod package;
mod synthesis;
mod version;

pub use crate::{
    annotation::Annotation,
    declaration::{
        Compound, CompoundKind, Declaration, Enum, EnumMember, Extends,
        Interface, Member, Method, NestedKind, Param, Typedef,
    },
    doc::{Doc, DocAnnotation, DocTag},
    entry::{Entry, EntryCollection},
    file::{FileKind, IdlFile},
    package::{Import, Package},
    synthesis::insert_missing_docs,
    version::Version,
};

/// Syntax nodes which know where they came from.
pub trait Syntax {
    fn span(&self) -> Span;
}

/// The span covering a run of tokens.
fn span_of(tokens: &[Token]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span() + last.span(),
        _ => Span::default(),
    }
}

/// Token values run together, the way types are written, like
/// `vec<int32_t>`.
fn tight(tokens: &[Token]) -> String {
    tokens.iter().map(Token::value).collect()
}

/// Token values separated by single spaces.
fn spaced(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The error for a field or statement that's missing pieces.
fn malformed(tokens: &[Token], parser: &Parser) -> Error {
    if tokens.is_empty() {
        Error::MalformedField(parser.last_span())
    } else {
        Error::MalformedField(span_of(tokens))
    }
}
