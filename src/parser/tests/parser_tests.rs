//! Parser tests
//!
//! These tests use the parser to build a different kind of syntax than IDL
//! declarations.
//!
//! This serves as an example of how to use the parser, and a (user) test for
//! if the APIs make sense, without us needing to keep the parser fixed on our
//! specific grammar.

use parser::{lexer::Grammar, Error, Options, Parse, Parser, Token};

// The test grammar is a list of `;` terminated statements, each a name and a
// brace-delimited set of comma separated words.
//
// S -> <word> '{' sep_by<<word>>(',') '}' ';'

#[derive(Debug)]
struct Statement {
    name: String,
    words: Vec<String>,
}

impl Parse for Statement {
    const NAME: &'static str = "statement";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        parser.scan_declaration_span()
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Statement, Error> {
        let name = parser.consume(Grammar::Word)?.value().to_string();

        let fields = parser.scan_delimited_list(
            Grammar::BraceOpen,
            Grammar::BraceClose,
            Grammar::Comma,
        )?;

        let mut words = Vec::new();
        for field in fields {
            match field {
                [word] => words.push(word.value().to_string()),
                _ => return Err(Error::MalformedField(field[0].span())),
            }
        }

        parser.consume(Grammar::Semicolon)?;
        Ok(Statement { name, words })
    }
}

#[test]
fn parse_statement() {
    let statement = Statement::parse("s { a, b, c };").unwrap();
    assert_eq!(statement.name, "s");
    assert_eq!(statement.words, vec!["a", "b", "c"]);
}

#[test]
fn parse_statement_trailing_separator() {
    let statement = Statement::parse("s { a, };").unwrap();
    assert_eq!(statement.words, vec!["a"]);
}

#[test]
fn parse_statement_incomplete() {
    assert!(matches!(
        Statement::parse("s { a }; t"),
        Err(Error::UnusedInput(_))
    ));
    assert!(matches!(
        Statement::parse("s { a }"),
        Err(Error::MissingTerminator(_))
    ));
}

#[test]
fn parse_statement_malformed() {
    assert!(matches!(
        Statement::parse("s { a b };"),
        Err(Error::MalformedField(_))
    ));
}

#[test]
fn parse_sequence() {
    let tokens = parser::lexer::tokenize("s { a }; t { b, c };").unwrap();
    let mut parser = Parser::new(&tokens, Options::default());

    let first: Statement = parser.parse().unwrap();
    let second: Statement = parser.parse().unwrap();

    assert_eq!(first.name, "s");
    assert_eq!(second.words, vec!["b", "c"]);
    assert!(parser.is_empty());
}

#[test]
fn parse_lex_error() {
    assert!(matches!(
        Statement::parse("s { a }; /* open"),
        Err(Error::Lexer(_))
    ));
}
