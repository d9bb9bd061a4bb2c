use parser::lexer::*;

fn values(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(|t| t.value().to_string())
        .collect()
}

#[test]
fn lexer_empty() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t ").unwrap().is_empty());
}

#[test]
fn lexer_package() {
    assert_eq!(
        values("package android.hardware.foo@1.0;"),
        vec!["package", "android", ".", "hardware", ".", "foo", "@", "1.0", ";"]
    );
}

#[test]
fn lexer_decimal_spacing() {
    for source in ["1.5", "1 . 5", "1. 5", "1 .5"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "{:?}", source);
        assert_eq!(tokens[0].grammar(), Grammar::Decimal);
        assert_eq!(tokens[0].value(), "1.5");
    }
}

#[test]
fn lexer_operator_spacing() {
    let tokens = tokenize("a : : b").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].grammar(), Grammar::Scope);

    let tokens = tokenize("a < < b").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].grammar(), Grammar::ShiftLeft);
}

#[test]
fn lexer_generic_types() {
    assert_eq!(values("vec<uint8_t> data;"), vec!["vec", "<", "uint8_t", ">", "data", ";"]);
}

#[test]
fn lexer_categories() {
    let tokens = tokenize("oneway foo(uint32_t x) generates (bool ok);").unwrap();
    let categories: Vec<Category> = tokens.iter().map(Token::category).collect();

    assert_eq!(categories[0], Category::Keyword);
    assert_eq!(categories[1], Category::Word);
    assert_eq!(categories[2], Category::Delimiter);
    assert_eq!(categories[3], Category::Keyword);
}

#[test]
fn lexer_doc_lines() {
    let source = "/**\n * Line one.\n *\n * Line two.\n */";
    let grammar: Vec<Grammar> = tokenize(source).unwrap().iter().map(Token::grammar).collect();

    assert_eq!(
        grammar,
        vec![
            Grammar::DocStart,
            Grammar::DocWord,
            Grammar::DocWord,
            Grammar::DocWord,
            Grammar::EmptyLine,
            Grammar::DocWord,
            Grammar::DocWord,
            Grammar::DocWord,
            Grammar::DocEnd,
        ]
    );
}

#[test]
fn lexer_doc_tags() {
    let tokens = tokenize("/** @param x an x\n * @return y */").unwrap();
    let tags: Vec<Grammar> = tokens
        .iter()
        .filter(|t| t.category() == Category::DocAnnotation)
        .map(Token::grammar)
        .collect();

    assert_eq!(tags, vec![Grammar::Param, Grammar::Return]);
}

#[test]
fn lexer_unterminated_doc() {
    assert!(matches!(tokenize("/** abc"), Err(Error::UnterminatedDoc(_))));
}

#[test]
fn lexer_annotation_in_doc_is_prose() {
    let tokens = tokenize("/** use @callflow */").unwrap();
    assert!(tokens[1..tokens.len() - 1]
        .iter()
        .all(|t| t.grammar() == Grammar::DocWord));
}

#[test]
fn lexer_spans_point_at_source_lines() {
    let tokens = tokenize("struct A {\n  int32_t x;\n};").unwrap();
    let x = tokens.iter().find(|t| t.value() == "x").unwrap();
    assert_eq!(x.span().start().line(), 1);
}

#[test]
fn pad_round_trip_keeps_literals() {
    for text in [
        "Sets the value (in ms), see IFoo.bar.",
        "Returns 1.5 or 2; never 3.",
        "Calls a::b with x<y>.",
    ] {
        let restored = unpad(&pad(text));
        let words = |s: &str| -> Vec<String> {
            s.split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect()
        };
        assert_eq!(words(&restored), words(text), "{:?}", restored);
    }
}
