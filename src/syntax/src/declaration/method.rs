//! Interface methods.

use super::*;

/// A method of an interface.
///
/// # Grammar
///
/// Method := prefix? name `(` sep_by_trailing(Param, `,`) `)`
///           (`generates` `(` sep_by_trailing(Param, `,`) `)`)? `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    /// A leading keyword, like `oneway`.
    prefix: Option<String>,
    name: String,
    params: Vec<Param>,
    returns: Vec<Param>,
}

/// A parameter or a return value of a method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    type_name: String,
    name: String,
}

impl Method {
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn returns(&self) -> &[Param] {
        &self.returns
    }

    pub fn is_oneway(&self) -> bool {
        self.prefix.as_deref() == Some(Grammar::Oneway.text())
    }
}

impl Param {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Parse for Method {
    const NAME: &'static str = "method";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        check_start(parser)?;
        parser.scan_declaration_span()
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Method, Error> {
        let prefix = match parser.peek_token() {
            Some(t)
                if matches!(t.category(), Category::Keyword | Category::TypeDef) =>
            {
                parser.advance();
                Some(t.value().to_string())
            }
            _ => None,
        };

        let name = identifier(parser, "a method name")?;

        let params = if parser.peek() == Some(Grammar::ParenOpen) {
            param_list(parser)?
        } else {
            Vec::new()
        };

        let returns = if parser.consume(Grammar::Generates).is_ok() {
            param_list(parser)?
        } else {
            Vec::new()
        };

        parser.consume(Grammar::Semicolon)?;

        Ok(Method {
            prefix,
            name,
            params,
            returns,
        })
    }
}

/// A parenthesized list of `type name` pairs.
fn param_list(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let fields = parser.scan_delimited_list(
        Grammar::ParenOpen,
        Grammar::ParenClose,
        Grammar::Comma,
    )?;

    fields
        .into_iter()
        .map(|field| match field.split_last() {
            Some((name, ty)) if !ty.is_empty() && name.is_identifier() => Ok(Param {
                type_name: tight(ty),
                name: name.value().to_string(),
            }),
            _ => Err(malformed(field, parser)),
        })
        .collect()
}
