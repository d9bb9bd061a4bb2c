//! Whole IDL files.

use diagnostic::Diagnostic;
use parser::{lexer::tokenize, Options};
use serde::Serialize;

use super::*;

/// What kind of file this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A file declaring exactly one interface, like `IFoo.hal`.
    Interface,
    /// A file with only types, like `types.hal`.
    Types,
}

/// A parsed IDL file.
///
/// # Grammar
///
/// IdlFile := [`Package`] [`Import`]* [`Entry`]*
///
/// Only the package and import statements and documented entries are kept.
/// Every type declaration is an entry, even if it has no documentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdlFile {
    package: Package,
    imports: Vec<Import>,
    kind: FileKind,
    entries: Vec<Entry>,
}

impl IdlFile {
    /// Parse a whole file, returning any warnings along with it.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::IdlFile;
    /// let source = "package a.b@1.0;\nstruct Point { float x; float y; };";
    /// let (file, warnings) = IdlFile::parse_source(source, Default::default()).unwrap();
    /// assert_eq!(file.structs().count(), 1);
    /// assert!(warnings.is_empty());
    /// ```
    pub fn parse_source(
        input: &str,
        options: Options,
    ) -> Result<(IdlFile, Vec<Diagnostic>), Error> {
        let tokens = insert_missing_docs(tokenize(input)?);
        let mut parser = Parser::new(&tokens, options);
        let file = parser.parse::<IdlFile>()?;
        parser.expect_empty()?;
        Ok((file, parser.take_warnings()))
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry for the file's interface, if it's an interface file.
    pub fn interface(&self) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| matches!(e.declaration(), Declaration::Interface(_)))
    }

    pub fn enums(&self) -> impl Iterator<Item = &Enum> {
        self.entries.iter().filter_map(|e| match e.declaration() {
            Declaration::Enum(e) => Some(e),
            _ => None,
        })
    }

    /// Structs, unions and safe_unions.
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.entries.iter().filter_map(|e| match e.declaration() {
            Declaration::Compound(c) => Some(c),
            _ => None,
        })
    }

    pub fn structs(&self) -> impl Iterator<Item = &Compound> {
        self.compounds()
            .filter(|c| c.kind() == CompoundKind::Struct)
    }

    /// Unions and safe_unions.
    pub fn unions(&self) -> impl Iterator<Item = &Compound> {
        self.compounds()
            .filter(|c| c.kind() != CompoundKind::Struct)
    }

    pub fn typedefs(&self) -> impl Iterator<Item = &Typedef> {
        self.entries.iter().filter_map(|e| match e.declaration() {
            Declaration::Typedef(t) => Some(t),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.entries.iter().filter_map(|e| match e.declaration() {
            Declaration::Method(m) => Some(m),
            _ => None,
        })
    }
}

impl Parse for IdlFile {
    const NAME: &'static str = "IDL file";

    /// Unlike other syntax, whole files also get documentation comments for
    /// undocumented types. See [`IdlFile::parse_source`].
    fn parse(input: &str) -> Result<IdlFile, Error> {
        IdlFile::parse_source(input, Options::default()).map(|(file, _)| file)
    }

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        let start = parser.mark();
        while parser.advance().is_some() {}
        Ok(parser.span_since(start))
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<IdlFile, Error> {
        let tokens = parser.remaining();

        let mut packages = outside_docs(tokens).filter(|(_, t)| t.is(Grammar::Package));
        let package = match packages.next() {
            Some((i, _)) => parser.nested(&tokens[i..], |p| p.parse::<Package>())?,
            None => return Err(Error::MissingPackage),
        };
        if let Some((_, second)) = packages.next() {
            return Err(Error::DuplicatePackage(second.span()));
        }

        let mut imports = Vec::new();
        for (i, _) in outside_docs(tokens).filter(|(_, t)| t.is(Grammar::Import)) {
            imports.push(parser.nested(&tokens[i..], |p| p.parse::<Import>())?);
        }

        let kind = classify(tokens);
        let entries = parser.parse::<EntryCollection>()?.into_entries();

        if kind == FileKind::Interface {
            let mut interfaces = entries
                .iter()
                .filter(|e| matches!(e.declaration(), Declaration::Interface(_)));

            if interfaces.next().is_none() {
                return Err(Error::MissingInterface);
            }
            if let Some(second) = interfaces.next() {
                return Err(Error::MultipleInterfaces(second.span()));
            }
        }

        Ok(IdlFile {
            package,
            imports,
            kind,
            entries,
        })
    }
}

/// The tokens which aren't inside documentation comments, with their
/// indices.
fn outside_docs(tokens: &[Token]) -> impl Iterator<Item = (usize, &Token)> {
    let mut in_doc = false;

    tokens.iter().enumerate().filter(move |(_, t)| {
        match t.grammar() {
            Grammar::DocStart => in_doc = true,
            Grammar::DocEnd => in_doc = false,
            _ => return !in_doc,
        }
        false
    })
}

/// Interface files have an `interface` keyword followed by a name.
fn classify(tokens: &[Token]) -> FileKind {
    let mut code = outside_docs(tokens).map(|(_, t)| t).peekable();

    while let Some(token) = code.next() {
        if token.is(Grammar::Interface) && code.peek().map_or(false, |t| t.is_identifier()) {
            return FileKind::Interface;
        }
    }

    FileKind::Types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_files() {
        let tokens = tokenize("interface IFoo {};").unwrap();
        assert_eq!(classify(&tokens), FileKind::Interface);

        let tokens = tokenize("/** an interface IFoo */\nstruct S {};").unwrap();
        assert_eq!(classify(&tokens), FileKind::Types);

        let tokens = tokenize("foo(vec<interface> all);").unwrap();
        assert_eq!(classify(&tokens), FileKind::Types);
    }

    #[test]
    fn outside_docs_skips_markers() {
        let tokens = tokenize("a /** b */\nc").unwrap();
        let values: Vec<_> = outside_docs(&tokens).map(|(_, t)| t.value()).collect();
        assert_eq!(values, vec!["a", "c"]);
    }
}
