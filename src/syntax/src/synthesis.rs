//! Empty documentation comments for undocumented declarations.

use diagnostic::Span;

use super::*;

/// Insert an empty documentation comment in front of every type declaration
/// which doesn't have one, so every type shows up as an [`Entry`].
///
/// Annotations between a comment and its declaration are fine. A type keyword
/// right before a `>` is a type argument like `vec<interface>`, and one inside
/// parentheses is a parameter type like `(interface service)`. Neither is a
/// declaration.
///
/// ```
/// # use parser::lexer::{tokenize, Grammar};
/// # use syntax::insert_missing_docs;
/// let tokens = insert_missing_docs(tokenize("struct S {};").unwrap());
/// assert_eq!(tokens[0].grammar(), Grammar::DocStart);
/// assert_eq!(tokens[1].grammar(), Grammar::DocEnd);
/// ```
pub fn insert_missing_docs(tokens: Vec<Token>) -> Vec<Token> {
    let mut insert_at = Vec::new();
    let mut parens = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token.grammar() {
            Grammar::ParenOpen => parens += 1,
            Grammar::ParenClose => parens = parens.saturating_sub(1),
            _ => {}
        }

        if token.category() != Category::TypeDef || parens > 0 {
            continue;
        }

        if tokens.get(i + 1).map_or(false, |t| t.is(Grammar::AngleClose)) {
            continue;
        }

        let mut j = i;
        while j >= 2
            && tokens[j - 1].category() == Category::Annotation
            && tokens[j - 2].is(Grammar::At)
        {
            j -= 2;
        }

        if j == 0 || !tokens[j - 1].is(Grammar::DocEnd) {
            insert_at.push((j, token.span()));
        }
    }

    if insert_at.is_empty() {
        return tokens;
    }

    let mut out = Vec::with_capacity(tokens.len() + insert_at.len() * 2);
    let mut pending = insert_at.into_iter().peekable();

    for (i, token) in tokens.into_iter().enumerate() {
        while let Some(&(at, span)) = pending.peek() {
            if at != i {
                break;
            }

            let here = Span::new(span.start(), span.start());
            out.push(Token::synthesized(Grammar::DocStart, here));
            out.push(Token::synthesized(Grammar::DocEnd, here));
            pending.next();
        }

        out.push(token);
    }

    out
}

#[cfg(test)]
mod tests {
    use parser::lexer::tokenize;

    use super::*;

    fn synthesized(source: &str) -> Vec<Grammar> {
        insert_missing_docs(tokenize(source).unwrap())
            .iter()
            .map(Token::grammar)
            .collect()
    }

    #[test]
    fn documented_is_untouched() {
        let source = "/** S. */\nstruct S {};";
        assert_eq!(synthesized(source).len(), tokenize(source).unwrap().len());
    }

    #[test]
    fn annotations_are_skipped() {
        assert_eq!(
            synthesized("@export\nenum E : int8_t {};")[..4],
            [
                Grammar::DocStart,
                Grammar::DocEnd,
                Grammar::At,
                Grammar::Export
            ]
        );

        let source = "/** E. */\n@export\nenum E : int8_t {};";
        assert_eq!(synthesized(source).len(), tokenize(source).unwrap().len());
    }

    #[test]
    fn type_arguments_are_skipped() {
        let source = "foo(vec<interface> all);";
        assert_eq!(synthesized(source).len(), tokenize(source).unwrap().len());
    }

    #[test]
    fn parameter_types_are_skipped() {
        let source = "get(string fqName) generates (interface service);";
        assert_eq!(synthesized(source).len(), tokenize(source).unwrap().len());

        let source = "add(interface a, (interface) b);";
        assert_eq!(synthesized(source).len(), tokenize(source).unwrap().len());
    }

    #[test]
    fn nested_declarations() {
        let grammar = synthesized("struct A {\n  struct B { int8_t x; } b;\n};");
        let docs = grammar.iter().filter(|&&g| g == Grammar::DocStart).count();
        assert_eq!(docs, 2);
    }
}
