//! Parsing individual pieces of IDL syntax.

use parser::Parse;
use syntax::*;

#[test]
fn test_doc_round_trip() {
    let doc = Doc::parse(
        "/**\n * First paragraph line one\n * line two.\n *\n *\n * Second paragraph.\n */",
    )
    .unwrap();
    assert_eq!(
        doc.description(),
        "First paragraph line one line two.\n\nSecond paragraph."
    );
}

#[test]
fn test_doc_unterminated() {
    let result = Doc::parse("/** abc");
    assert!(
        matches!(result, Err(parser::Error::Lexer(_))),
        "expected a lexical error but got {:?}",
        result
    );
}

#[test]
fn test_doc_nested() {
    let result = Doc::parse("/** outer /** inner */ */");
    assert!(matches!(
        result.as_ref().map_err(parser::Error::kind),
        Err(parser::ErrorKind::Parse)
    ));
}

#[test]
fn test_enum() {
    let e = Enum::parse("enum Color : int32_t { RED = 0, GREEN, BLUE = 2 };").unwrap();
    let members = e.members();

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].value(), Some("0"));
    assert_eq!(members[1].value(), None);
    assert_eq!(members[2].value(), Some("2"));
}

#[test]
fn test_enum_value_after_last_equals() {
    let e = Enum::parse("enum E : int32_t { A = B = 3 };").unwrap();
    assert_eq!(e.members()[0].value(), Some("3"));
}

#[test]
fn test_method() {
    let m = Method::parse("exampleMethod(int32_t x, string y) generates (int32_t result);")
        .unwrap();

    assert_eq!(m.name(), "exampleMethod");

    let params: Vec<_> = m.params().iter().map(|p| (p.type_name(), p.name())).collect();
    assert_eq!(params, vec![("int32_t", "x"), ("string", "y")]);

    let returns: Vec<_> = m.returns().iter().map(|p| (p.type_name(), p.name())).collect();
    assert_eq!(returns, vec![("int32_t", "result")]);
}

#[test]
fn test_interface_extends() {
    let i = Interface::parse("interface IFoo extends @1.0::IBar {};").unwrap();
    let extends = i.extends().unwrap();

    assert_eq!(extends.name(), "IBar");
    assert_eq!(extends.version().map(|v| v.to_string()), Some("1.0".to_string()));
}

#[test]
fn test_package() {
    let p = Package::parse("package android.hardware.foo@1.0;").unwrap();
    assert_eq!(p.name(), "android.hardware.foo");
    assert_eq!(p.version().to_string(), "1.0");
}

#[test]
fn test_typedef() {
    let t = Typedef::parse("typedef vec<int32_t> Ids;").unwrap();
    assert_eq!(t.name(), "Ids");
    assert_eq!(t.type_name(), "vec<int32_t>");
}

#[test]
fn test_entry_with_everything() {
    let entry = Entry::parse(
        "/**\n * Opens a session.\n *\n * @param id the session\n * @return status OK if opened\n */\n@entry\n@callflow(next={\"close\"})\nopen(uint32_t id) generates (Status status);",
    )
    .unwrap();

    assert_eq!(entry.doc().description(), "Opens a session.");
    assert_eq!(entry.doc().annotations().len(), 2);
    assert_eq!(entry.annotations().len(), 2);

    match entry.declaration() {
        Declaration::Method(m) => {
            assert_eq!(m.name(), "open");
            assert_eq!(m.returns()[0].type_name(), "Status");
        }
        other => panic!("expected a method, got {:?}", other),
    }
}

#[test]
fn test_entry_documented_package() {
    let result = Entry::parse("/** License. */\npackage a.b@1.0;");
    assert!(matches!(
        result.as_ref().map_err(parser::Error::kind),
        Err(parser::ErrorKind::IllegalEntry)
    ));
}
