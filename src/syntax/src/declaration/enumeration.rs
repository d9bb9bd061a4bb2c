//! Enum declarations.

use super::*;

/// # Grammar
///
/// Enum := `enum` name `:` type `{` sep_by_trailing(EnumMember, `,`) `}` `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    name: String,
    backing_type: String,
    members: Vec<EnumMember>,
}

/// # Grammar
///
/// EnumMember := Doc? name (`=` value)?
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    name: String,
    value: Option<String>,
    doc: Option<Doc>,
}

impl Enum {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type the enum's values are stored as, like `uint32_t`.
    pub fn backing_type(&self) -> &str {
        &self.backing_type
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }
}

impl EnumMember {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value expression, if one is given.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn doc(&self) -> Option<&Doc> {
        self.doc.as_ref()
    }
}

impl Parse for Enum {
    const NAME: &'static str = "enum";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        scan_keyword(parser, Grammar::Enum)
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Enum, Error> {
        parser.consume(Grammar::Enum)?;
        let name = identifier(parser, "an enum name")?;
        parser.consume(Grammar::Colon)?;

        let start = parser.mark();
        while parser.peek() != Some(Grammar::BraceOpen) {
            if parser.advance().is_none() {
                return Err(parser.eof("'{'"));
            }
        }

        let backing = parser.span_since(start);
        if backing.is_empty() {
            return Err(malformed(backing, parser));
        }
        let backing_type = tight(backing);

        let fields = parser.scan_delimited_list(
            Grammar::BraceOpen,
            Grammar::BraceClose,
            Grammar::Comma,
        )?;
        parser.consume(Grammar::Semicolon)?;

        let mut members = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(member) = member(parser, field)? {
                members.push(member);
            }
        }

        Ok(Enum {
            name,
            backing_type,
            members,
        })
    }
}

/// A member, or nothing if the field is just a stray comment.
fn member<'t>(
    parser: &mut Parser<'t>,
    field: &'t [Token],
) -> Result<Option<EnumMember>, Error> {
    let (doc, rest) = member_doc(parser, field)?;

    let name = match rest.first() {
        None => return Ok(None),
        Some(t) if t.is_identifier() => t.value().to_string(),
        Some(_) => return Err(malformed(rest, parser)),
    };

    let value = match rest.iter().rposition(|t| t.is(Grammar::Equals)) {
        Some(i) if i + 1 < rest.len() => Some(spaced(&rest[i + 1..])),
        Some(_) => return Err(malformed(rest, parser)),
        None if rest.len() == 1 => None,
        None => return Err(malformed(rest, parser)),
    };

    Ok(Some(EnumMember { name, value, doc }))
}
