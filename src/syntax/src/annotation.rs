//! Annotations on declarations, like `@entry` or `@callflow(next={"a"})`.

use serde::Serialize;

use super::*;

/// An annotation on a declaration.
///
/// # Grammar
///
/// Annotation := `@` tag (`(` argument `)`)?
///
/// The lexer folds the argument list into the tag's token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    name: String,

    /// The raw text between the outermost parentheses, if there were any.
    argument: String,

    #[serde(skip)]
    span: Span,
}

impl Annotation {
    /// The annotation's tag, without the `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }
}

impl Syntax for Annotation {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for Annotation {
    const NAME: &'static str = "annotation";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        let start = parser.mark();
        parser.consume(Grammar::At)?;

        match parser.peek_token() {
            Some(t) if t.category() == Category::Annotation => {
                parser.advance();
            }
            Some(t) => return Err(Error::UnknownTag(t.clone())),
            None => return Err(parser.eof(Self::NAME)),
        }

        Ok(parser.span_since(start))
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Annotation, Error> {
        let at = parser.consume(Grammar::At)?;
        let tag = parser.consume_if(
            |t| t.category() == Category::Annotation,
            Self::NAME,
        )?;

        let value = tag.value();
        let argument = match (value.find('('), value.rfind(')')) {
            (Some(open), Some(close)) if open < close => {
                value[open + 1..close].trim().to_string()
            }
            _ => String::new(),
        };

        Ok(Annotation {
            name: tag.grammar().text().to_string(),
            argument,
            span: at.span() + tag.span(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare() {
        let annotation = Annotation::parse("@entry").unwrap();
        assert_eq!(annotation.name(), "entry");
        assert_eq!(annotation.argument(), "");
    }

    #[test]
    fn with_argument() {
        let annotation = Annotation::parse("@callflow(next = {\"open\"})").unwrap();
        assert_eq!(annotation.name(), "callflow");
        assert_eq!(annotation.argument(), "next = { \"open\" }");
    }

    #[test]
    fn unknown() {
        assert!(matches!(
            Annotation::parse("@fixme"),
            Err(Error::UnknownTag(_))
        ));
    }
}
