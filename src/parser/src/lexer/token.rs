//! # Tokens
//!
//! Each token is an individual lexeme of an IDL file -- the smallest unit of
//! meaning.
//!
//! Tokens provide both the semantic information in the form of their
//! [`Grammar`] symbol, and the literal text they were built from.

use std::fmt;

use diagnostic::Span;
use unicode_xid::UnicodeXID;

/// An individual lexeme of an IDL file.
///
/// Tokens own their text: annotation tokens carry their folded argument list
/// and synthesized tokens have no source text at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The grammar symbol this token resolved to.
    grammar: Grammar,

    /// The literal text of this token.
    value: String,

    /// Where the token starts and ends in the padded input.
    span: Span,
}

impl Token {
    pub fn new(grammar: Grammar, value: impl Into<String>, span: Span) -> Token {
        Token {
            grammar,
            value: value.into(),
            span,
        }
    }

    /// A token which wasn't in the input, using the canonical text of
    /// `grammar`.
    pub fn synthesized(grammar: Grammar, span: Span) -> Token {
        Token::new(grammar, grammar.text(), span)
    }

    /// The grammar symbol of this token.
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The category of this token's grammar symbol.
    pub fn category(&self) -> Category {
        self.grammar.category()
    }

    /// The literal text of the token.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Is this token the grammar symbol `g`?
    pub fn is(&self, g: Grammar) -> bool {
        self.grammar == g
    }

    /// Is this a plain word which is also a valid identifier?
    pub fn is_identifier(&self) -> bool {
        self.grammar == Grammar::Word && is_identifier(&self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The broad class a [`Grammar`] symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved words that aren't declarations, including built-in types.
    Keyword,
    /// Reserved words which start a declaration, like `struct`.
    TypeDef,
    Delimiter,
    Operator,
    /// Tags following `@` in code, like `@callflow`.
    Annotation,
    /// Tags following `@` in documentation, like `@param`.
    DocAnnotation,
    /// Anything else in code.
    Word,
    Number,
    /// Anything else in documentation.
    DocWord,
}

/// The closed set of symbols of the IDL grammar.
///
/// Every symbol except the catch-alls (`Word`, `Integer`, `Decimal`,
/// `DocWord`) has a fixed canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    // Keywords
    Package,
    Import,
    Extends,
    Generates,
    Oneway,

    // Declarations
    Interface,
    Enum,
    Struct,
    Union,
    SafeUnion,
    Typedef,

    // Built-in types
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    Str,
    Handle,
    Memory,
    Pointer,
    Vector,
    Bitfield,
    FmqSync,
    FmqUnsync,

    // Delimiters
    BraceOpen,
    BraceClose,
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    AngleOpen,
    AngleClose,
    Colon,
    Semicolon,
    Comma,
    Period,
    Equals,
    At,
    DocStart,
    DocEnd,
    CommentStart,
    CommentLine,
    /// Stands in for a blank line inside a documentation comment.
    EmptyLine,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Xor,
    Tilde,
    Bang,
    Question,
    ShiftLeft,
    ShiftRight,
    LessEqual,
    GreaterEqual,
    EqualEqual,
    NotEqual,
    And,
    Or,
    Scope,

    // Annotations
    Callflow,
    Entry,
    Exit,
    Export,
    Hide,

    // Documentation annotations
    Param,
    Return,
    See,
    Deprecated,

    // Catch-alls
    Word,
    Integer,
    Decimal,
    DocWord,
}

impl Grammar {
    /// The delimiters which are padded with spaces before lexing, longest
    /// first so `/**` wins over shorter markers.
    ///
    /// The block comment opener `/*` is left out since padding it would split
    /// up `/**`.
    pub const PADDED: &'static [Grammar] = &[
        Grammar::DocStart,
        Grammar::DocEnd,
        Grammar::CommentLine,
        Grammar::BraceOpen,
        Grammar::BraceClose,
        Grammar::ParenOpen,
        Grammar::ParenClose,
        Grammar::BracketOpen,
        Grammar::BracketClose,
        Grammar::AngleOpen,
        Grammar::AngleClose,
        Grammar::Colon,
        Grammar::Semicolon,
        Grammar::Comma,
        Grammar::Period,
        Grammar::Equals,
        Grammar::At,
    ];

    /// The canonical text of the symbol.
    ///
    /// The catch-all symbols have no fixed text, they return a description
    /// instead.
    pub fn text(self) -> &'static str {
        use Grammar::*;
        match self {
            Package => "package",
            Import => "import",
            Extends => "extends",
            Generates => "generates",
            Oneway => "oneway",

            Interface => "interface",
            Enum => "enum",
            Struct => "struct",
            Union => "union",
            SafeUnion => "safe_union",
            Typedef => "typedef",

            Bool => "bool",
            Int8 => "int8_t",
            Uint8 => "uint8_t",
            Int16 => "int16_t",
            Uint16 => "uint16_t",
            Int32 => "int32_t",
            Uint32 => "uint32_t",
            Int64 => "int64_t",
            Uint64 => "uint64_t",
            Float => "float",
            Double => "double",
            Str => "string",
            Handle => "handle",
            Memory => "memory",
            Pointer => "pointer",
            Vector => "vec",
            Bitfield => "bitfield",
            FmqSync => "fmq_sync",
            FmqUnsync => "fmq_unsync",

            BraceOpen => "{",
            BraceClose => "}",
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            AngleOpen => "<",
            AngleClose => ">",
            Colon => ":",
            Semicolon => ";",
            Comma => ",",
            Period => ".",
            Equals => "=",
            At => "@",
            DocStart => "/**",
            DocEnd => "*/",
            CommentStart => "/*",
            CommentLine => "//",
            EmptyLine => "<empty line>",

            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Ampersand => "&",
            Pipe => "|",
            Xor => "^",
            Tilde => "~",
            Bang => "!",
            Question => "?",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            LessEqual => "<=",
            GreaterEqual => ">=",
            EqualEqual => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
            Scope => "::",

            Callflow => "callflow",
            Entry => "entry",
            Exit => "exit",
            Export => "export",
            Hide => "hide",

            Param => "param",
            Return => "return",
            See => "see",
            Deprecated => "deprecated",

            Word => "word",
            Integer => "integer",
            Decimal => "decimal",
            DocWord => "documentation text",
        }
    }

    /// The category of the symbol.
    pub fn category(self) -> Category {
        use Grammar::*;
        match self {
            Package | Import | Extends | Generates | Oneway => Category::Keyword,

            Interface | Enum | Struct | Union | SafeUnion | Typedef => {
                Category::TypeDef
            }

            Bool | Int8 | Uint8 | Int16 | Uint16 | Int32 | Uint32 | Int64
            | Uint64 | Float | Double | Str | Handle | Memory | Pointer
            | Vector | Bitfield | FmqSync | FmqUnsync => Category::Keyword,

            BraceOpen | BraceClose | ParenOpen | ParenClose | BracketOpen
            | BracketClose | AngleOpen | AngleClose | Colon | Semicolon
            | Comma | Period | Equals | At | DocStart | DocEnd
            | CommentStart | CommentLine | EmptyLine => Category::Delimiter,

            Plus | Minus | Star | Slash | Percent | Ampersand | Pipe | Xor
            | Tilde | Bang | Question | ShiftLeft | ShiftRight | LessEqual
            | GreaterEqual | EqualEqual | NotEqual | And | Or | Scope => {
                Category::Operator
            }

            Callflow | Entry | Exit | Export | Hide => Category::Annotation,

            Param | Return | See | Deprecated => Category::DocAnnotation,

            Word => Category::Word,
            Integer | Decimal => Category::Number,
            DocWord => Category::DocWord,
        }
    }

    /// The user-facing name of the symbol, used in error messages.
    pub fn name(self) -> String {
        match self.category() {
            Category::Word | Category::DocWord => self.text().to_string(),
            Category::Number => format!("{} literal", self.text()),
            Category::Annotation | Category::DocAnnotation => {
                format!("'@{}'", self.text())
            }
            _ => format!("'{}'", self.text()),
        }
    }

    /// Resolve some text from code to a symbol.
    ///
    /// Exact matches against reserved words, delimiters and operators come
    /// first, then integers and decimals. Anything else is a
    /// [`Grammar::Word`].
    ///
    /// Annotation tags are only meaningful after an `@`, so they're never
    /// produced here. See [`Grammar::annotation`].
    ///
    /// ```
    /// # use parser::lexer::Grammar;
    /// assert_eq!(Grammar::resolve("struct"), Grammar::Struct);
    /// assert_eq!(Grammar::resolve("1.0"), Grammar::Decimal);
    /// assert_eq!(Grammar::resolve("entry"), Grammar::Word);
    /// ```
    pub fn resolve(text: &str) -> Grammar {
        if let Some(reserved) = Grammar::reserved(text) {
            reserved
        } else if is_integer(text) {
            Grammar::Integer
        } else if is_decimal(text) {
            Grammar::Decimal
        } else {
            Grammar::Word
        }
    }

    /// Resolve the text following an `@` in code.
    pub fn annotation(text: &str) -> Option<Grammar> {
        use Grammar::*;
        Some(match text {
            "callflow" => Callflow,
            "entry" => Entry,
            "exit" => Exit,
            "export" => Export,
            "hide" => Hide,
            _ => return None,
        })
    }

    /// Resolve the text following an `@` in documentation.
    pub fn doc_annotation(text: &str) -> Option<Grammar> {
        use Grammar::*;
        Some(match text {
            "param" => Param,
            "return" => Return,
            "see" => See,
            "deprecated" => Deprecated,
            _ => return None,
        })
    }

    /// Does this documentation tag take a leading argument, like the
    /// parameter name after `@param`?
    pub fn takes_argument(self) -> bool {
        matches!(self, Grammar::Param | Grammar::Return)
    }

    /// Is this one of the keywords which declare a compound type?
    pub fn is_compound(self) -> bool {
        matches!(self, Grammar::Struct | Grammar::Union | Grammar::SafeUnion)
    }

    fn reserved(text: &str) -> Option<Grammar> {
        use Grammar::*;
        Some(match text {
            "package" => Package,
            "import" => Import,
            "extends" => Extends,
            "generates" => Generates,
            "oneway" => Oneway,

            "interface" => Interface,
            "enum" => Enum,
            "struct" => Struct,
            "union" => Union,
            "safe_union" => SafeUnion,
            "typedef" => Typedef,

            "bool" => Bool,
            "int8_t" => Int8,
            "uint8_t" => Uint8,
            "int16_t" => Int16,
            "uint16_t" => Uint16,
            "int32_t" => Int32,
            "uint32_t" => Uint32,
            "int64_t" => Int64,
            "uint64_t" => Uint64,
            "float" => Float,
            "double" => Double,
            "string" => Str,
            "handle" => Handle,
            "memory" => Memory,
            "pointer" => Pointer,
            "vec" => Vector,
            "bitfield" => Bitfield,
            "fmq_sync" => FmqSync,
            "fmq_unsync" => FmqUnsync,

            "{" => BraceOpen,
            "}" => BraceClose,
            "(" => ParenOpen,
            ")" => ParenClose,
            "[" => BracketOpen,
            "]" => BracketClose,
            "<" => AngleOpen,
            ">" => AngleClose,
            ":" => Colon,
            ";" => Semicolon,
            "," => Comma,
            "." => Period,
            "=" => Equals,
            "@" => At,
            "/**" => DocStart,
            "*/" => DocEnd,
            "/*" => CommentStart,
            "//" => CommentLine,

            "+" => Plus,
            "-" => Minus,
            "*" => Star,
            "/" => Slash,
            "%" => Percent,
            "&" => Ampersand,
            "|" => Pipe,
            "^" => Xor,
            "~" => Tilde,
            "!" => Bang,
            "?" => Question,
            "<<" => ShiftLeft,
            ">>" => ShiftRight,
            "<=" => LessEqual,
            ">=" => GreaterEqual,
            "==" => EqualEqual,
            "!=" => NotEqual,
            "&&" => And,
            "||" => Or,
            "::" => Scope,

            _ => return None,
        })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Is this a valid identifier, i.e. does it start with an underscore or an
/// [`is_xid_start`][UnicodeXID::is_xid_start] character followed by
/// [`is_xid_continue`][UnicodeXID::is_xid_continue] characters?
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c == '_' || UnicodeXID::is_xid_start(c) => {
            chars.all(UnicodeXID::is_xid_continue)
        }
        _ => false,
    }
}

/// An optionally signed decimal integer, or a hexadecimal one like `0xCAFE`.
fn is_integer(text: &str) -> bool {
    let unsigned = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);

    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit())
}

/// Digits on both sides of a single `.`, like `1.0`.
fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_reserved() {
        assert_eq!(Grammar::resolve("package"), Grammar::Package);
        assert_eq!(Grammar::resolve("vec"), Grammar::Vector);
        assert_eq!(Grammar::resolve("::"), Grammar::Scope);
        assert_eq!(Grammar::resolve("/**"), Grammar::DocStart);
    }

    #[test]
    fn resolve_numbers() {
        assert_eq!(Grammar::resolve("42"), Grammar::Integer);
        assert_eq!(Grammar::resolve("-1"), Grammar::Integer);
        assert_eq!(Grammar::resolve("0xFF"), Grammar::Integer);
        assert_eq!(Grammar::resolve("1.5"), Grammar::Decimal);
        assert_eq!(Grammar::resolve("1.5.2"), Grammar::Word);
        assert_eq!(Grammar::resolve(".5"), Grammar::Word);
        assert_eq!(Grammar::resolve("0x"), Grammar::Word);
    }

    #[test]
    fn resolve_words() {
        assert_eq!(Grammar::resolve("IFoo"), Grammar::Word);
        assert_eq!(Grammar::resolve("callflow"), Grammar::Word);
        assert_eq!(Grammar::resolve("param"), Grammar::Word);
    }

    #[test]
    fn tags() {
        assert_eq!(Grammar::annotation("entry"), Some(Grammar::Entry));
        assert_eq!(Grammar::annotation("param"), None);
        assert_eq!(Grammar::doc_annotation("param"), Some(Grammar::Param));
        assert!(Grammar::Param.takes_argument());
        assert!(!Grammar::See.takes_argument());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("IFoo"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn categories() {
        assert_eq!(Grammar::Struct.category(), Category::TypeDef);
        assert_eq!(Grammar::Oneway.category(), Category::Keyword);
        assert_eq!(Grammar::Uint32.category(), Category::Keyword);
        assert_eq!(Grammar::Decimal.category(), Category::Number);
        assert_eq!(Grammar::Export.category(), Category::Annotation);
    }

    #[test]
    fn every_padded_delimiter_resolves_to_itself() {
        for &g in Grammar::PADDED {
            assert_eq!(Grammar::resolve(g.text()), g);
            assert_eq!(g.category(), Category::Delimiter);
        }
    }
}
