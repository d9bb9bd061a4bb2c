//! Documentation comments.
//!
//! A documentation comment is free text, broken into paragraphs by blank
//! lines, with tags like `@param` mixed in.
//!
//! ```text
//! /**
//!  * Opens the device.
//!  *
//!  * @param id which device to open
//!  * @return status OK on success
//!  */
//! ```

use diagnostic::Diagnostic;
use parser::lexer::unpad_tokens;
use serde::Serialize;

use super::*;

/// The documentation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocTag {
    Param,
    Return,
    See,
    Deprecated,
}

impl DocTag {
    fn from_grammar(grammar: Grammar) -> Option<DocTag> {
        match grammar {
            Grammar::Param => Some(DocTag::Param),
            Grammar::Return => Some(DocTag::Return),
            Grammar::See => Some(DocTag::See),
            Grammar::Deprecated => Some(DocTag::Deprecated),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocTag::Param => "param",
            DocTag::Return => "return",
            DocTag::See => "see",
            DocTag::Deprecated => "deprecated",
        }
    }

    /// Does the tag name something before its description?
    pub fn takes_argument(self) -> bool {
        matches!(self, DocTag::Param | DocTag::Return)
    }
}

/// A tag inside a documentation comment.
///
/// # Grammar
///
/// DocAnnotation := `@` tag argument? description
///
/// The description runs until a blank line, the end of the comment or the
/// next tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocAnnotation {
    tag: DocTag,
    argument: Option<String>,
    description: String,

    #[serde(skip)]
    span: Span,
}

impl DocAnnotation {
    pub fn tag(&self) -> DocTag {
        self.tag
    }

    /// The name of the parameter or return value, for tags that have one.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Syntax for DocAnnotation {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for DocAnnotation {
    const NAME: &'static str = "documentation tag";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        let start = parser.mark();
        parser.consume(Grammar::At)?;
        let tag = parser.consume_if(
            |t| t.category() == Category::DocAnnotation,
            Self::NAME,
        )?;

        if tag.grammar().takes_argument() {
            parser.consume_if(
                |t| t.is(Grammar::DocWord),
                &format!("a name after '@{}'", tag.value()),
            )?;
        }

        loop {
            match parser.peek() {
                Some(Grammar::EmptyLine) => {
                    parser.advance();
                    break;
                }
                Some(Grammar::DocEnd) | Some(Grammar::At) | None => break,
                Some(_) => {
                    parser.advance();
                }
            }
        }

        Ok(parser.span_since(start))
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<DocAnnotation, Error> {
        let at = parser.consume(Grammar::At)?;
        let token = parser.consume_if(
            |t| t.category() == Category::DocAnnotation,
            Self::NAME,
        )?;

        let tag = DocTag::from_grammar(token.grammar())
            .ok_or_else(|| Error::UnknownTag(token.clone()))?;

        let argument = if tag.takes_argument() {
            let name = parser.consume(Grammar::DocWord)?;
            Some(name.value().to_string())
        } else {
            None
        };

        let mut words = Vec::new();
        while let Some(token) = parser.advance() {
            if token.is(Grammar::DocWord) {
                words.push(token);
            }
        }

        let span = at.span() + parser.last_span();
        let description = unpad_tokens(words);

        if tag.takes_argument() && description.is_empty() {
            let error = Error::MissingDescription {
                tag: tag.name().to_string(),
                span,
            };

            if parser.options().permissive {
                parser.warn(Diagnostic::from(&error));
            } else {
                return Err(error);
            }
        }

        Ok(DocAnnotation {
            tag,
            argument,
            description,
            span,
        })
    }
}

/// A documentation comment.
///
/// # Grammar
///
/// Doc := `/**` (text | [`DocAnnotation`])* `*/`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Doc {
    /// The free text, with paragraphs separated by a blank line.
    description: String,

    /// The tags, in the order they appear.
    annotations: Vec<DocAnnotation>,

    #[serde(skip)]
    span: Span,
}

impl Doc {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn annotations(&self) -> &[DocAnnotation] {
        &self.annotations
    }

    /// The tags with a specific [`DocTag`].
    pub fn tagged(&self, tag: DocTag) -> impl Iterator<Item = &DocAnnotation> {
        self.annotations.iter().filter(move |a| a.tag == tag)
    }

    /// Is there nothing in this comment?
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.annotations.is_empty()
    }
}

impl Syntax for Doc {
    fn span(&self) -> Span {
        self.span
    }
}

impl Parse for Doc {
    const NAME: &'static str = "documentation comment";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        parser.scan_doc_span()
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Doc, Error> {
        let open = parser.consume(Grammar::DocStart)?;

        let mut paragraphs: Vec<Vec<&Token>> = Vec::new();
        let mut annotations = Vec::new();
        let mut new_paragraph = true;

        let close = loop {
            match parser.peek_token() {
                Some(t) if t.is(Grammar::DocEnd) => {
                    parser.advance();
                    break t;
                }
                Some(t) if t.is(Grammar::EmptyLine) => {
                    parser.advance();
                    new_paragraph = true;
                }
                Some(t) if t.is(Grammar::At) => {
                    annotations.push(parser.parse::<DocAnnotation>()?);
                    new_paragraph = true;
                }
                Some(t) => {
                    parser.advance();
                    match paragraphs.last_mut() {
                        Some(words) if !new_paragraph => words.push(t),
                        _ => paragraphs.push(vec![t]),
                    }
                    new_paragraph = false;
                }
                None => return Err(Error::UnclosedDoc(open.span())),
            }
        };

        let description = paragraphs
            .iter()
            .map(|words| unpad_tokens(words.iter().copied()))
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(Doc {
            description,
            annotations,
            span: open.span() + close.span(),
        })
    }
}

#[cfg(test)]
mod tests {
    use parser::Options;

    use super::*;

    #[test]
    fn paragraphs() {
        let doc = Doc::parse(
            "/**\n * First paragraph line one\n * line two.\n *\n *\n * Second paragraph.\n */",
        )
        .unwrap();

        assert_eq!(
            doc.description(),
            "First paragraph line one line two.\n\nSecond paragraph."
        );
        assert!(doc.annotations().is_empty());
    }

    #[test]
    fn leading_and_trailing_blank_lines() {
        let doc = Doc::parse("/**\n *\n * Text.\n *\n */").unwrap();
        assert_eq!(doc.description(), "Text.");
    }

    #[test]
    fn empty() {
        let doc = Doc::parse("/** */").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn tags_in_order() {
        let doc = Doc::parse(
            "/**\n * Opens it.\n *\n * @param id which one\n * @return status OK, or\n *     an error.\n * @see close\n */",
        )
        .unwrap();

        assert_eq!(doc.description(), "Opens it.");

        let tags: Vec<DocTag> = doc.annotations().iter().map(|a| a.tag()).collect();
        assert_eq!(tags, vec![DocTag::Param, DocTag::Return, DocTag::See]);

        let ret = doc.tagged(DocTag::Return).next().unwrap();
        assert_eq!(ret.argument(), Some("status"));
        assert_eq!(ret.description(), "OK, or an error.");

        let see = doc.tagged(DocTag::See).next().unwrap();
        assert_eq!(see.argument(), None);
        assert_eq!(see.description(), "close");
    }

    #[test]
    fn qualified_names_in_prose() {
        let doc = Doc::parse(
            "/**\n * Returns Status.OK on success, see IFoo.Event. Then\n * stop.\n *\n * @return status Status.OK on success\n */",
        )
        .unwrap();

        assert_eq!(
            doc.description(),
            "Returns Status.OK on success, see IFoo.Event. Then stop."
        );
        assert_eq!(doc.annotations()[0].description(), "Status.OK on success");
    }

    #[test]
    fn text_after_tag_paragraph() {
        let doc = Doc::parse("/**\n * @deprecated use bar\n *\n * More.\n */").unwrap();
        assert_eq!(doc.description(), "More.");
        assert_eq!(doc.annotations()[0].description(), "use bar");
    }

    #[test]
    fn missing_argument() {
        assert!(Doc::parse("/** @param */").is_err());
    }

    #[test]
    fn missing_description() {
        assert!(matches!(
            Doc::parse("/** @param x */"),
            Err(Error::MissingDescription { .. })
        ));
    }

    #[test]
    fn missing_description_permissive() {
        let tokens = parser::lexer::tokenize("/** @param x */").unwrap();
        let mut parser = Parser::new(&tokens, Options::permissive());

        let doc = parser.parse::<Doc>().unwrap();
        assert_eq!(doc.annotations()[0].description(), "");
        assert_eq!(parser.take_warnings().len(), 1);
    }

    #[test]
    fn nested() {
        assert!(matches!(
            Doc::parse("/** outer /** inner */ */"),
            Err(Error::NestedDoc(_))
        ));
    }
}
