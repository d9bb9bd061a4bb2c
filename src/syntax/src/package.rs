//! `package` and `import` statements.

use serde::Serialize;

use super::*;

/// The package an IDL file belongs to.
///
/// # Grammar
///
/// Package := `package` name `@` version `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    name: String,
    version: Version,

    #[serde(skip)]
    span: Span,
}

impl Package {
    /// The dotted package name, like `android.hardware.foo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl Syntax for Package {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for Package {
    const NAME: &'static str = "package statement";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        match parser.peek_token() {
            Some(t) if t.is(Grammar::Package) => parser.scan_declaration_span(),
            Some(t) => Err(Error::Unexpected {
                wanted: Self::NAME.to_string(),
                found: t.clone(),
            }),
            None => Err(parser.eof(Self::NAME)),
        }
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Package, Error> {
        let keyword = parser.consume(Grammar::Package)?;

        let start = parser.mark();
        while parser.peek() != Some(Grammar::At) {
            if parser.advance().is_none() {
                return Err(parser.eof("'@' and a version"));
            }
        }

        let name = parser.span_since(start);
        if name.is_empty() {
            return Err(malformed(name, parser));
        }
        let name = tight(name);

        parser.consume(Grammar::At)?;
        let version = Version::consume(parser)?;
        let semicolon = parser.consume(Grammar::Semicolon)?;

        Ok(Package {
            name,
            version,
            span: keyword.span() + semicolon.span(),
        })
    }
}

/// A dependency on another package or type.
///
/// # Grammar
///
/// Import := `import` name `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    name: String,

    #[serde(skip)]
    span: Span,
}

impl Import {
    /// What's imported, like `android.hardware.foo@1.0::IFoo`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Syntax for Import {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for Import {
    const NAME: &'static str = "import statement";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        match parser.peek_token() {
            Some(t) if t.is(Grammar::Import) => parser.scan_declaration_span(),
            Some(t) => Err(Error::Unexpected {
                wanted: Self::NAME.to_string(),
                found: t.clone(),
            }),
            None => Err(parser.eof(Self::NAME)),
        }
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Import, Error> {
        let keyword = parser.consume(Grammar::Import)?;

        let rest = parser.remaining();
        match rest.split_last() {
            Some((semicolon, name)) if !name.is_empty() && semicolon.is(Grammar::Semicolon) => {
                while parser.advance().is_some() {}

                Ok(Import {
                    name: tight(name),
                    span: keyword.span() + semicolon.span(),
                })
            }
            _ => Err(malformed(rest, parser)),
        }
    }
}
