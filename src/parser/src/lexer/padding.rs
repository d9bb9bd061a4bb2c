//! Delimiter padding.
//!
//! The lexer splits its input on whitespace, which doesn't work on its own for
//! a grammar as punctuation-heavy as this one. Before lexing, every delimiter
//! gets a space on either side with [`pad`]. Since that's not how anyone
//! writes prose, documentation text goes back through [`unpad`] before it's
//! rendered.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::{Grammar, Token};

/// Decimals split apart by padding, like `1 . 0`. Decimals which are already
/// whole aren't matched, so they can't hide a split next to them.
static SPLIT_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d)(?:[ \t]+\.[ \t]*|\.[ \t]+)(\d)").unwrap()
});

/// Two-character operators split apart by padding, and what they merge back
/// into.
static SPLIT_OPERATORS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r":[ \t]*:", "::"),
        (r"<[ \t]*<", "<<"),
        (r">[ \t]*>", ">>"),
        (r"<[ \t]*=", "<="),
        (r">[ \t]*=", ">="),
        (r"=[ \t]*=", "=="),
        (r"![ \t]*=", "!="),
    ]
    .into_iter()
    .map(|(pattern, merged)| (Regex::new(pattern).unwrap(), merged))
    .collect()
});

/// A padded delimiter with its padding.
static PADDED_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    let mut delimiters = vec![Grammar::CommentLine];
    delimiters.extend(Grammar::PADDED.iter().filter(|g| {
        !matches!(g, Grammar::DocStart | Grammar::DocEnd | Grammar::CommentLine)
    }));

    let alternatives: Vec<String> = delimiters
        .iter()
        .map(|g| regex::escape(g.text()))
        .collect();

    Regex::new(&format!(" ?({}) ?", alternatives.join("|"))).unwrap()
});

static COMMA_NO_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",(\S)").unwrap());

/// Surround every delimiter with spaces so the input can be split on
/// whitespace.
///
/// Padding only inserts spaces within a line, so line numbers in the result
/// are the same as in `source`.
///
/// ```
/// # use parser::lexer::pad;
/// assert_eq!(pad("vec<int32_t>"), "vec < int32_t > ");
/// assert_eq!(pad("@1.0::IFoo"), " @ 1.0 :: IFoo");
/// ```
pub fn pad(source: &str) -> String {
    let mut padded = String::with_capacity(source.len() * 2);

    for line in source.split_inclusive('\n') {
        pad_line(line, &mut padded);
    }

    repair(padded)
}

fn pad_line(line: &str, out: &mut String) {
    let mut rest = line;

    'scan: while let Some(c) = rest.chars().next() {
        // An empty block comment would otherwise open a doc block.
        if let Some(after) = rest.strip_prefix("/**/") {
            out.push_str(" /* */ ");
            rest = after;
            continue;
        }

        for delimiter in Grammar::PADDED {
            if let Some(after) = rest.strip_prefix(delimiter.text()) {
                out.push(' ');
                out.push_str(delimiter.text());
                out.push(' ');
                rest = after;
                continue 'scan;
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
}

/// Merge back together the things padding shouldn't have split.
fn repair(mut text: String) -> String {
    // Each pass can only merge every other period in a dotted run of
    // numbers, like an address.
    loop {
        let merged = SPLIT_DECIMAL.replace_all(&text, "$1.$2").into_owned();
        if merged == text {
            break;
        }
        text = merged;
    }

    for (pattern, merged) in SPLIT_OPERATORS.iter() {
        text = pattern.replace_all(&text, *merged).into_owned();
    }

    text
}

/// Undo padding for documentation prose.
///
/// This also adds the space after a comma that writers often leave out.
///
/// ```
/// # use parser::lexer::unpad;
/// assert_eq!(unpad("Returns the value ( if any ) ."), "Returns the value(if any).");
/// assert_eq!(unpad("a , b ,c"), "a, b, c");
/// ```
pub fn unpad(text: &str) -> String {
    let text = PADDED_DELIMITER.replace_all(text, "$1");
    COMMA_NO_SPACE.replace_all(&text, ", $1").into_owned()
}

/// Undo padding for a run of prose tokens from the same padded input.
///
/// Joining tokens with single spaces loses whether the writer put a space
/// after a delimiter, which is the difference between `IFoo.Event` and the
/// end of a sentence. The spans still know, so the padded spacing is rebuilt
/// from them first. Runs of whitespace and line breaks become one space.
///
/// ```
/// # use parser::lexer::{tokenize, unpad_tokens};
/// let tokens = tokenize("Status.OK is fine. Really.").unwrap();
/// assert_eq!(unpad_tokens(&tokens), "Status.OK is fine. Really.");
/// ```
pub fn unpad_tokens<'t>(tokens: impl IntoIterator<Item = &'t Token>) -> String {
    let mut padded = String::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        if let Some(previous) = previous {
            let before = padding_after(previous.value()) + padding_before(token.value());
            let (end, start) = (previous.span().end(), token.span().start());

            let spaced = end.line() != start.line()
                || start.column().saturating_sub(end.column()) as usize > before;

            for _ in 0..before + spaced as usize {
                padded.push(' ');
            }
        }

        padded.push_str(token.value());
        previous = Some(token);
    }

    unpad(&padded)
}

/// The space [`pad`] puts in front of a token's text.
fn padding_before(text: &str) -> usize {
    Grammar::PADDED
        .iter()
        .any(|g| text.starts_with(g.text())) as usize
}

/// The space [`pad`] puts after a token's text.
fn padding_after(text: &str) -> usize {
    Grammar::PADDED.iter().any(|g| text.ends_with(g.text())) as usize
}
