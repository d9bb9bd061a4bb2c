//! Parsing whole files.

use parser::{Error, ErrorKind, Options, Parse};
use syntax::*;

const TYPES: &str = r#"/*
 * Copyright notice, in a block comment.
 */

package android.hardware.example@1.1;

import android.hardware.example@1.0::types;
import android.hidl.base@1.0;

/**
 * A point.
 */
struct Point {
    /** Across. */
    float x;
    /** Down. */
    float y;
};

/** Colors. */
enum Color : int32_t {
    /** Red. */
    RED = 0,
    GREEN,
    BLUE = 2,
};

@export
union Value {
    int32_t i;
    float f;
};

typedef vec<Point> Path;

// Not a declaration of anything.
"#;

const INTERFACE: &str = r#"package android.hardware.example@1.1;

import @1.0::IExample;

/**
 * An example interface.
 *
 * @see IExample
 */
interface IExample extends @1.0::IExample {
    /**
     * Starts things.
     *
     * @param mode how to start
     * @return ok whether it started
     */
    @entry
    start(uint32_t mode) generates (bool ok);

    /** Stops things. */
    oneway stop();

    /** Inner type. */
    enum State : uint8_t { IDLE, RUNNING };
};
"#;

#[test]
fn test_types_file() {
    let (file, warnings) = IdlFile::parse_source(TYPES, Options::default()).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(file.kind(), FileKind::Types);
    assert_eq!(file.package().name(), "android.hardware.example");
    assert_eq!(file.package().version(), Version::new(1, 1));

    let imports: Vec<_> = file.imports().iter().map(Import::name).collect();
    assert_eq!(
        imports,
        vec!["android.hardware.example@1.0::types", "android.hidl.base@1.0"]
    );

    assert_eq!(file.entries().len(), 4);
    assert_eq!(file.structs().count(), 1);
    assert_eq!(file.unions().count(), 1);
    assert_eq!(file.compounds().count(), 2);
    assert_eq!(file.enums().count(), 1);
    assert_eq!(file.typedefs().count(), 1);
    assert_eq!(file.methods().count(), 0);
    assert!(file.interface().is_none());

    let point = file.structs().next().unwrap();
    assert_eq!(point.members()[1].doc().unwrap().description(), "Down.");

    let union = &file.entries()[2];
    assert_eq!(union.doc().description(), "");
    assert!(union.annotation("export").is_some());
}

#[test]
fn test_interface_file() {
    let (file, _) = IdlFile::parse_source(INTERFACE, Options::default()).unwrap();

    assert_eq!(file.kind(), FileKind::Interface);

    let interface = file.interface().unwrap();
    assert!(interface.doc().description().starts_with("An example interface."));
    assert_eq!(interface.doc().annotations()[0].tag(), DocTag::See);

    match interface.declaration() {
        Declaration::Interface(i) => {
            assert_eq!(i.name(), "IExample");
            assert_eq!(i.extends().unwrap().version(), Some(Version::new(1, 0)));
        }
        other => panic!("expected an interface, got {:?}", other),
    }

    let methods: Vec<_> = file.methods().map(Method::name).collect();
    assert_eq!(methods, vec!["start", "stop"]);
    assert!(file.methods().nth(1).unwrap().is_oneway());
    assert_eq!(file.enums().count(), 1);

    let start = &file.entries()[1];
    assert!(start.annotation("entry").is_some());
    let param = start.doc().tagged(DocTag::Param).next().unwrap();
    assert_eq!(param.argument(), Some("mode"));
    assert_eq!(param.description(), "how to start");
}

#[test]
fn test_undocumented_struct() {
    let source = "package a.b@1.0;\nstruct Point { float x; float y; };";
    let file = IdlFile::parse(source).unwrap();

    assert_eq!(file.entries().len(), 1);
    assert_eq!(file.entries()[0].doc().description(), "");
}

#[test]
fn test_interface_as_parameter_type() {
    let source = r#"package a.b@1.0;

interface IManager {
    get(string fqName) generates (interface service);

    /** Finds a service. */
    find(string fqName) generates (interface service);

    /** Adds a service. */
    add(string fqName, interface service) generates (bool ok);
};
"#;
    let file = IdlFile::parse(source).unwrap();

    assert_eq!(file.entries().len(), 3);
    let methods: Vec<_> = file.methods().collect();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].name(), "find");
    assert_eq!(methods[0].returns()[0].type_name(), "interface");
    assert_eq!(methods[1].name(), "add");
    assert_eq!(methods[1].params()[1].type_name(), "interface");
}

#[test]
fn test_missing_package() {
    assert!(matches!(
        IdlFile::parse("struct Point { float x; };"),
        Err(Error::MissingPackage)
    ));
}

#[test]
fn test_duplicate_package() {
    assert!(matches!(
        IdlFile::parse("package a@1.0;\npackage b@1.0;"),
        Err(Error::DuplicatePackage(_))
    ));
}

#[test]
fn test_package_in_doc_is_ignored() {
    let source = "/** package not.this@9.9; */\npackage a.b@1.0;\n";
    let result = IdlFile::parse_source(source, Options::permissive());
    let (file, warnings) = result.unwrap();

    assert_eq!(file.package().name(), "a.b");
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_multiple_interfaces() {
    let source = "package a@1.0;\ninterface IA {};\ninterface IB {};";
    assert!(matches!(
        IdlFile::parse(source),
        Err(Error::MultipleInterfaces(_))
    ));
}

const MALFORMED: &str = r#"/**
 * Licensed under some license.
 */
package a.b@1.0;

/** The first. */
struct First { int32_t a; };

/** The second. */
struct Second { int32_t b; };
"#;

#[test]
fn test_malformed_entry_permissive() {
    let (file, warnings) =
        IdlFile::parse_source(MALFORMED, Options::permissive()).unwrap();

    let names: Vec<_> = file.structs().map(Compound::name).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_malformed_entry_strict() {
    let result = IdlFile::parse_source(MALFORMED, Options::default());
    assert!(matches!(
        result.as_ref().map_err(Error::kind),
        Err(ErrorKind::IllegalEntry)
    ));
}

#[test]
fn test_lex_error_is_fatal() {
    let result = IdlFile::parse_source("package a@1.0;\n/** never closed", Options::permissive());
    assert!(matches!(result, Err(Error::Lexer(_))));
}

#[test]
fn test_json() {
    let source = "package a.b@1.0;\n/** A point. */\nstruct Point { float x; };";
    let file = IdlFile::parse(source).unwrap();
    let json = serde_json::to_value(&file).unwrap();

    assert_eq!(json["package"]["name"], "a.b");
    assert_eq!(json["package"]["version"], "1.0");
    assert_eq!(json["kind"], "types");
    assert_eq!(json["entries"][0]["doc"]["description"], "A point.");
    assert_eq!(json["entries"][0]["declaration"]["type"], "compound");
    assert_eq!(json["entries"][0]["declaration"]["kind"], "struct");
    assert_eq!(json["entries"][0]["declaration"]["members"][0]["type_name"], "float");
}
