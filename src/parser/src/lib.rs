//! A lexer for IDL files and a parser-writing tool built around it.
//!
//! [`Parser`] doesn't parse the IDL grammar itself, but instead provides tools
//! for writing parsers centered around the [`Parse`] trait where each type of
//! syntax node knows how to parse itself.
//!
//! It lexes the whole input up front with [`tokenize`][crate::lexer::tokenize]
//! and provides arbitrary lookahead with [`peek_nth`][Parser::peek_nth].
//!
//! Parsing a node happens in two steps. First [`Parse::scan`] finds the span
//! of tokens the node covers and moves the outer parser past them. Then
//! [`Parse::parse_span`] builds the node from a fresh child parser over just
//! that span. Most of the grammar is delimited by `;`, braces or
//! documentation comments, so scanning rarely needs to understand what it's
//! stepping over.

pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;

pub use crate::{
    error::{Error, ErrorKind},
    lexer::Token,
    options::Options,
    parser::Parser,
};

/// Implementing this trait tells a [`Parser`] how to parse your piece of
/// syntax. The idea is to implement this for as many syntax nodes as possible
/// to allow the parser to start parsing at different places in the grammar.
pub trait Parse: Sized {
    /// What this is called, for error messages.
    const NAME: &'static str;

    /// Does an outer parser need to see this node's tokens again?
    ///
    /// Parsers of things containing this node should [`reset`] back to the
    /// start of it after it's parsed. See [`Parser::mark`].
    ///
    /// [`reset`]: Parser::reset
    const RESETS: bool = false;

    fn parse(input: &str) -> Result<Self, Error> {
        let tokens = lexer::tokenize(input)?;
        let mut parser = Parser::new(&tokens, Options::default());
        let syntax = parser.parse::<Self>()?;
        parser.expect_empty()?;
        Ok(syntax)
    }

    /// This is the method used to compose pieces of syntax which implement
    /// [`Parse`] into a larger syntax tree.
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self, Error> {
        let span = Self::scan(parser)?;
        parser.nested(span, Self::parse_span)
    }

    /// Find and consume the tokens this node covers.
    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error>;

    /// Build the node from a parser over exactly the tokens [`Parse::scan`]
    /// found.
    fn parse_span(parser: &mut Parser<'_>) -> Result<Self, Error>;
}
