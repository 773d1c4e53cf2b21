//! Black-box lexer coverage: token classification, spans, and the
//! invariants from §8 of the distilled specification.

use sqltoast::{Lexer, Symbol};

fn symbols(input: &str) -> Vec<Symbol> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next();
        if tok.is_eos() {
            break;
        }
        out.push(tok.symbol);
    }
    out
}

#[test]
fn keyword_token_text_matches_canonical_spelling_case_insensitively() {
    let mut lexer = Lexer::new("SeLeCt");
    let tok = lexer.next();
    assert_eq!(tok.symbol, Symbol::Select);
    assert!(tok.text(lexer.input()).eq_ignore_ascii_case("select"));
}

#[test]
fn every_token_span_lies_within_input_bounds() {
    let input = "CREATE TABLE t (a INT, b VARCHAR(10));";
    let mut lexer = Lexer::new(input);
    loop {
        let tok = lexer.next();
        assert!(tok.span.start <= tok.span.end);
        assert!(tok.span.end <= input.len());
        if tok.is_eos() {
            break;
        }
    }
}

#[test]
fn peek_is_idempotent_and_matches_next() {
    let mut lexer = Lexer::new("SELECT a FROM t");
    let first_peek = lexer.peek();
    let second_peek = lexer.peek();
    assert_eq!(first_peek, second_peek);
    let advanced = lexer.next();
    assert_eq!(advanced.symbol, first_peek);
}

#[test]
fn line_comments_are_transparent_to_tokenization() {
    let with_comment = "SELECT a -- trailing remark\n FROM t;";
    let without_comment = "SELECT a \n FROM t;";
    assert_eq!(symbols(with_comment), symbols(without_comment));
}

#[test]
fn delimited_identifiers_are_tokenized_whole() {
    let mut lexer = Lexer::new(r#""My Table""#);
    let tok = lexer.next();
    assert_eq!(tok.symbol, Symbol::Identifier);
    assert_eq!(tok.text(lexer.input()), r#""My Table""#);
}

#[test]
fn bracketed_comment_is_not_skipped() {
    assert_eq!(
        symbols("a /* note */ b"),
        vec![Symbol::Identifier, Symbol::Comment, Symbol::Identifier]
    );
}

#[test]
fn approximate_numeric_literal_requires_digits_around_exponent() {
    assert_eq!(symbols("1.5E10")[0], Symbol::LiteralApproximateNumber);
    // "1.5E" with no trailing digit cannot be an approximate literal; the
    // numeric scanner stops before the dangling E and the caller sees a
    // decimal literal followed by an identifier-shaped token.
    let toks = symbols("1.5E");
    assert_eq!(toks[0], Symbol::LiteralUnsignedDecimal);
}

#[test]
fn hex_and_bit_strings_require_well_formed_bodies() {
    assert_eq!(symbols("X'FF'")[0], Symbol::LiteralHexString);
    assert_eq!(symbols("B'1010'")[0], Symbol::LiteralBitString);
}

#[test]
fn unterminated_constructs_yield_error_tokens() {
    assert_eq!(symbols("/* never closes"), vec![Symbol::Error]);
    assert_eq!(symbols("'never closes"), vec![Symbol::Error]);
}
