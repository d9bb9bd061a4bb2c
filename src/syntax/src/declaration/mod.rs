//! Declarations, the things documentation comments are attached to.

mod compound;
mod enumeration;
mod interface;
mod method;
mod typedef;

use serde::Serialize;

use super::*;

pub use self::{
    compound::{Compound, CompoundKind, Member, NestedKind},
    enumeration::{Enum, EnumMember},
    interface::{Extends, Interface},
    method::{Method, Param},
    typedef::Typedef,
};

/// One of the kinds of declaration, picked by the first token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Declaration {
    Interface(Interface),
    Enum(Enum),
    Compound(Compound),
    Method(Method),
    Typedef(Typedef),
}

impl Declaration {
    /// Does the declaration starting with `first` need to be scanned again by
    /// whatever contains it?
    pub fn resets(first: Grammar) -> bool {
        match first {
            Grammar::Interface => Interface::RESETS,
            Grammar::Enum => Enum::RESETS,
            Grammar::Typedef => Typedef::RESETS,
            g if g.is_compound() => Compound::RESETS,
            _ => Method::RESETS,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(i) => i.name(),
            Declaration::Enum(e) => e.name(),
            Declaration::Compound(c) => c.name(),
            Declaration::Method(m) => m.name(),
            Declaration::Typedef(t) => t.name(),
        }
    }
}

impl Parse for Declaration {
    const NAME: &'static str = "declaration";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        match parser.peek() {
            Some(Grammar::Interface) => Interface::scan(parser),
            Some(Grammar::Enum) => Enum::scan(parser),
            Some(Grammar::Typedef) => Typedef::scan(parser),
            Some(g) if g.is_compound() => Compound::scan(parser),
            Some(_) => Method::scan(parser),
            None => Err(parser.eof(Self::NAME)),
        }
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Declaration, Error> {
        match parser.peek() {
            Some(Grammar::Interface) => {
                Interface::parse_span(parser).map(Declaration::Interface)
            }
            Some(Grammar::Enum) => Enum::parse_span(parser).map(Declaration::Enum),
            Some(Grammar::Typedef) => {
                Typedef::parse_span(parser).map(Declaration::Typedef)
            }
            Some(g) if g.is_compound() => {
                Compound::parse_span(parser).map(Declaration::Compound)
            }
            Some(_) => Method::parse_span(parser).map(Declaration::Method),
            None => Err(parser.eof(Self::NAME)),
        }
    }
}

/// Declarations only come right after a documentation comment or an
/// annotation, or at the very start of the input.
fn check_start(parser: &Parser) -> Result<(), Error> {
    match parser.previous() {
        None => Ok(()),
        Some(t) if t.is(Grammar::DocEnd) => Ok(()),
        Some(t) if t.category() == Category::Annotation => Ok(()),
        Some(t) => {
            let span = parser.peek_token().map(Token::span).unwrap_or(t.span());
            Err(Error::InvalidDeclarationStart(span))
        }
    }
}

/// Scan a `;` terminated declaration which must start with `keyword`.
fn scan_keyword<'t>(
    parser: &mut Parser<'t>,
    keyword: Grammar,
) -> Result<&'t [Token], Error> {
    check_start(parser)?;

    match parser.peek_token() {
        Some(t) if t.is(keyword) => parser.scan_declaration_span(),
        Some(t) => Err(Error::Unexpected {
            wanted: keyword.name(),
            found: t.clone(),
        }),
        None => Err(parser.eof(&keyword.name())),
    }
}

/// Split the documentation comment off the front of a member's tokens, if it
/// has one.
fn member_doc<'t>(
    parser: &mut Parser<'t>,
    field: &'t [Token],
) -> Result<(Option<Doc>, &'t [Token]), Error> {
    match field.first() {
        Some(t) if t.is(Grammar::DocStart) => parser.nested(field, |child| {
            let doc = child.parse::<Doc>()?;
            Ok((Some(doc), child.remaining()))
        }),
        _ => Ok((None, field)),
    }
}

/// The name of something, which must be an identifier.
fn identifier(parser: &mut Parser, what: &str) -> Result<String, Error> {
    let token = parser.consume_if(Token::is_identifier, what)?;
    Ok(token.value().to_string())
}
