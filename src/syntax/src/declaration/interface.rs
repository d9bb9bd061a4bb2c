//! Interface declarations.

use super::*;

/// What an interface extends, like `android.hardware.foo@1.0::IFoo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extends {
    /// The package, when it's spelled out.
    package: Option<String>,
    version: Option<Version>,
    name: String,
}

impl Extends {
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn version(&self) -> Option<Version> {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An interface declaration.
///
/// Only the header is parsed. The methods and types declared in the body are
/// entries of their own, so an interface's tokens are scanned again by
/// whatever contains it.
///
/// # Grammar
///
/// Interface := `interface` name (`extends` package? (`@` version `::`)? name)? `{` ... `}` `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    name: String,
    extends: Option<Extends>,
}

impl Interface {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extends(&self) -> Option<&Extends> {
        self.extends.as_ref()
    }
}

impl Parse for Interface {
    const NAME: &'static str = "interface";
    const RESETS: bool = true;

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        scan_keyword(parser, Grammar::Interface)
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Interface, Error> {
        parser.consume(Grammar::Interface)?;
        let name = identifier(parser, "an interface name")?;

        let extends = if parser.consume(Grammar::Extends).is_ok() {
            let start = parser.mark();
            while parser.peek() != Some(Grammar::BraceOpen) {
                if parser.advance().is_none() {
                    return Err(parser.eof("'{'"));
                }
            }

            Some(extends(parser.span_since(start), parser)?)
        } else {
            None
        };

        parser.consume(Grammar::BraceOpen)?;

        Ok(Interface { name, extends })
    }
}

fn extends(header: &[Token], parser: &Parser) -> Result<Extends, Error> {
    let name = header
        .iter()
        .rev()
        .find(|t| t.is_identifier())
        .ok_or_else(|| malformed(header, parser))?;

    let version = header
        .iter()
        .find(|t| t.category() == Category::Number)
        .map(|t| {
            Version::parse(t.value()).ok_or(Error::MalformedField(t.span()))
        })
        .transpose()?;

    let package = header
        .iter()
        .position(|t| t.is(Grammar::At))
        .filter(|&at| at > 0)
        .map(|at| tight(&header[..at]));

    Ok(Extends {
        package,
        version,
        name: name.value().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain() {
        let interface = Interface::parse("interface IFoo { foo(); };").unwrap();
        assert_eq!(interface.name(), "IFoo");
        assert!(interface.extends().is_none());
    }

    #[test]
    fn extends_versioned() {
        let interface =
            Interface::parse("interface IFoo extends @1.0::IBar {};").unwrap();
        let extends = interface.extends().unwrap();

        assert_eq!(extends.name(), "IBar");
        assert_eq!(extends.version(), Some(Version::new(1, 0)));
        assert_eq!(extends.package(), None);
    }

    #[test]
    fn extends_qualified() {
        let interface = Interface::parse(
            "interface IFoo extends android.hardware.bar@2.1::IBar {};",
        )
        .unwrap();
        let extends = interface.extends().unwrap();

        assert_eq!(extends.package(), Some("android.hardware.bar"));
        assert_eq!(extends.version(), Some(Version::new(2, 1)));
    }

    #[test]
    fn extends_local() {
        let interface = Interface::parse("interface IFoo extends IBase {};").unwrap();
        assert_eq!(interface.extends().unwrap().name(), "IBase");
        assert_eq!(interface.extends().unwrap().version(), None);
    }

    #[test]
    fn missing_name() {
        assert!(Interface::parse("interface {};").is_err());
    }
}
