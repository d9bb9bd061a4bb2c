//! Struct, union and safe_union declarations.

use super::*;

/// Which kind of compound type is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundKind {
    Struct,
    Union,
    SafeUnion,
}

impl CompoundKind {
    fn from_grammar(grammar: Grammar) -> Option<CompoundKind> {
        match grammar {
            Grammar::Struct => Some(CompoundKind::Struct),
            Grammar::Union => Some(CompoundKind::Union),
            Grammar::SafeUnion => Some(CompoundKind::SafeUnion),
            _ => None,
        }
    }
}

/// The kind of type declared inside a compound's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedKind {
    Struct,
    Union,
    SafeUnion,
    Enum,
}

impl NestedKind {
    fn from_grammar(grammar: Grammar) -> Option<NestedKind> {
        match grammar {
            Grammar::Struct => Some(NestedKind::Struct),
            Grammar::Union => Some(NestedKind::Union),
            Grammar::SafeUnion => Some(NestedKind::SafeUnion),
            Grammar::Enum => Some(NestedKind::Enum),
            _ => None,
        }
    }
}

/// # Grammar
///
/// Compound := (`struct` | `union` | `safe_union`) name `{` (Member `;`)* `}` `;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    kind: CompoundKind,
    name: String,
    members: Vec<Member>,
}

/// A field of a compound type, or a type declared inside it.
///
/// # Grammar
///
/// Member := Doc? type name
///         | Doc? (`struct` | `union` | `safe_union` | `enum`) type ... name?
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    type_name: String,
    name: String,
    doc: Option<Doc>,

    /// For nested declarations, what kind of type is declared.
    nested: Option<NestedKind>,
}

impl Compound {
    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl Member {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&Doc> {
        self.doc.as_ref()
    }

    pub fn nested(&self) -> Option<NestedKind> {
        self.nested
    }
}

impl Parse for Compound {
    const NAME: &'static str = "struct or union";

    fn scan<'t>(parser: &mut Parser<'t>) -> Result<&'t [Token], Error> {
        check_start(parser)?;

        match parser.peek_token() {
            Some(t) if t.grammar().is_compound() => parser.scan_declaration_span(),
            Some(t) => Err(Error::Unexpected {
                wanted: Self::NAME.to_string(),
                found: t.clone(),
            }),
            None => Err(parser.eof(Self::NAME)),
        }
    }

    fn parse_span(parser: &mut Parser<'_>) -> Result<Compound, Error> {
        let keyword = parser.consume_if(|t| t.grammar().is_compound(), Self::NAME)?;
        let kind = CompoundKind::from_grammar(keyword.grammar())
            .ok_or_else(|| malformed(std::slice::from_ref(keyword), parser))?;

        let name = identifier(parser, "a type name")?;

        let fields = parser.scan_delimited_list(
            Grammar::BraceOpen,
            Grammar::BraceClose,
            Grammar::Semicolon,
        )?;
        parser.consume(Grammar::Semicolon)?;

        let mut members = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(member) = member(parser, field)? {
                members.push(member);
            }
        }

        Ok(Compound {
            kind,
            name,
            members,
        })
    }
}

fn member<'t>(
    parser: &mut Parser<'t>,
    field: &'t [Token],
) -> Result<Option<Member>, Error> {
    let (doc, rest) = member_doc(parser, field)?;

    let (first, last) = match (rest.first(), rest.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(None),
    };

    if let Some(nested) = NestedKind::from_grammar(first.grammar()) {
        let type_name = rest
            .get(1)
            .ok_or_else(|| malformed(rest, parser))?
            .value()
            .to_string();

        // A declaration with no field of its own type is named after the type.
        let name = if last.is(Grammar::BraceClose) {
            type_name.clone()
        } else {
            last.value().to_string()
        };

        return Ok(Some(Member {
            type_name,
            name,
            doc,
            nested: Some(nested),
        }));
    }

    if rest.len() < 2 || !last.is_identifier() {
        return Err(malformed(rest, parser));
    }

    Ok(Some(Member {
        type_name: tight(&rest[..rest.len() - 1]),
        name: last.value().to_string(),
        doc,
        nested: None,
    }))
}
