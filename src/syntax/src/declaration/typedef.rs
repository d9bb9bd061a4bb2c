//! Type aliases.

use super::*;

/// # Grammar
///
/// Typedef := `typedef` type name `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typedef {
    name: String,
    type_name: String,
}

impl Typedef {
    /// The new name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type being named.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Parse for Typedef {
    const NAME: &'static str = "typedef";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        scan_keyword(parser, Grammar::Typedef)
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Typedef, Error> {
        parser.consume(Grammar::Typedef)?;

        let rest = parser.remaining();
        match rest {
            [ty @ .., name, semicolon]
                if !ty.is_empty() && semicolon.is(Grammar::Semicolon) =>
            {
                if !name.is_identifier() {
                    return Err(malformed(rest, parser));
                }

                while parser.advance().is_some() {}

                Ok(Typedef {
                    name: name.value().to_string(),
                    type_name: tight(ty),
                })
            }
            _ => Err(malformed(rest, parser)),
        }
    }
}
