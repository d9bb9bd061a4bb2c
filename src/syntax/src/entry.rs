//! Documented entries, and collecting them from a file.

use diagnostic::Diagnostic;
use parser::{lexer::tokenize, Options};
use serde::Serialize;

use super::*;

/// A documented declaration.
///
/// # Grammar
///
/// Entry := [`Doc`] [`Annotation`]* [`Declaration`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    doc: Doc,
    annotations: Vec<Annotation>,
    declaration: Declaration,

    #[serde(skip)]
    span: Span,
}

impl Entry {
    pub fn doc(&self) -> &Doc {
        &self.doc
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// The annotation with the tag `name`, if there is one.
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name() == name)
    }
}

impl Syntax for Entry {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for Entry {
    const NAME: &'static str = "documented entry";

    /// Parse a single entry which makes up all of `input`.
    ///
    /// Unlike inside an [`EntryCollection`], an interface isn't rewound to
    /// collect the entries in its body, they're part of this one.
    fn parse(input: &str) -> Result<Entry, Error> {
        let tokens = tokenize(input)?;
        let mut parser = Parser::new(&tokens, Options::default());
        let (span, _) = scan_entry(&mut parser)?;
        let entry = parser.nested(span, Entry::parse_span)?;
        parser.expect_empty()?;
        Ok(entry)
    }

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        let (span, rewind) = scan_entry(parser)?;
        if let Some(mark) = rewind {
            parser.reset(mark);
        }
        Ok(span)
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Entry, Error> {
        // Only the last of a run of comments is kept.
        let mut doc = parser.parse::<Doc>()?;
        while parser.peek() == Some(Grammar::DocStart) {
            doc = parser.parse::<Doc>()?;
        }

        let mut annotations = Vec::new();
        while parser.peek() == Some(Grammar::At) {
            annotations.push(parser.parse::<Annotation>()?);
        }

        let declaration = parser.parse::<Declaration>()?;
        let span = doc.span() + parser.last_span();

        Ok(Entry {
            doc,
            annotations,
            declaration,
            span,
        })
    }
}

/// Scan an entry, along with where to rewind to if its declaration's body
/// holds more entries.
fn scan_entry<'t>(
    parser: &mut Parser<'t>,
) -> Result<(&'t [Token], Option<usize>), Error> {
    let start = parser.mark();
    parser.scan_doc_span()?;

    while parser.peek() == Some(Grammar::DocStart) {
        let redundant = span_of(parser.span_since(start));
        let error = Error::RedundantDoc(redundant);

        if parser.options().permissive {
            parser.warn(Diagnostic::from(&error));
            parser.scan_doc_span()?;
        } else {
            return Err(error);
        }
    }

    while parser.peek() == Some(Grammar::At) {
        match parser.peek_nth(1) {
            Some(g) if g.category() == Category::Annotation => {
                Annotation::scan(parser)?;
            }
            Some(_) => {
                parser.advance();
                let tag = parser.peek_token().cloned();
                return Err(tag.map_or_else(
                    || parser.eof(Annotation::NAME),
                    Error::UnknownTag,
                ));
            }
            None => return Err(parser.eof(Annotation::NAME)),
        }
    }

    let first = match parser.peek_token() {
        None => return Err(parser.eof(Declaration::NAME)),
        Some(t) if t.is(Grammar::Package) => {
            return Err(Error::IllegalEntry(t.clone()))
        }
        Some(t) if t.is(Grammar::DocStart) => {
            return Err(Error::NestedDoc(t.span()))
        }
        Some(t)
            if !matches!(
                t.category(),
                Category::Word | Category::TypeDef | Category::Keyword
            ) =>
        {
            return Err(Error::InvalidEntryStart(t.clone()))
        }
        Some(t) => t.grammar(),
    };

    let declaration_start = parser.mark();
    Declaration::scan(parser)?;
    let span = parser.span_since(start);
    let rewind = Declaration::resets(first).then(|| declaration_start);

    Ok((span, rewind))
}

/// All the entries in some input, in order.
///
/// Entries start at documentation comments, and anything in between them is
/// skipped. In permissive mode an entry that's not allowed to be documented
/// is dropped with a warning.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl Parse for EntryCollection {
    const NAME: &'static str = "entries";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        let start = parser.mark();
        while parser.advance().is_some() {}
        Ok(parser.span_since(start))
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<EntryCollection, Error> {
        let mut entries = Vec::new();

        loop {
            while !matches!(parser.peek(), Some(Grammar::DocStart) | None) {
                parser.advance();
            }

            if parser.is_empty() {
                break;
            }

            let mark = parser.mark();
            match parser.parse::<Entry>() {
                Ok(entry) => entries.push(entry),
                Err(e) if e.is_recoverable() && parser.options().permissive => {
                    parser.warn(Diagnostic::from(&e));
                    parser.reset(mark);
                    parser.advance();
                }
                Err(e) => return Err(e),
            }
        }

        Ok(EntryCollection { entries })
    }
}
