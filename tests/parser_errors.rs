//! Black-box coverage of the error taxonomy and caret-marked rendering
//! (§7, §8).

use sqltoast::{parse, ParseCode, ParseOptions};

#[test]
fn empty_input_is_input_error_not_syntax_error() {
    let result = parse("");
    assert_eq!(result.code, ParseCode::InputError);
    assert!(result.error_text.is_some());
    assert!(result.statements.is_empty());
}

#[test]
fn unterminated_bracketed_comment_is_a_syntax_error() {
    let result = parse("SELECT a FROM t /* never closes");
    assert_eq!(result.code, ParseCode::SyntaxError);
}

#[test]
fn unterminated_delimited_identifier_is_a_syntax_error() {
    let result = parse(r#"SELECT "never closes FROM t;"#);
    assert_eq!(result.code, ParseCode::SyntaxError);
}

#[test]
fn rejected_input_never_retains_a_partial_statement() {
    let result = parse("CREATE TABLE t (a INT, b");
    assert_eq!(result.code, ParseCode::SyntaxError);
    assert!(result.statements.is_empty());
}

#[test]
fn error_text_carries_the_original_input_a_caret_line_and_a_message() {
    let input = "CREATE TABLE t (";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::SyntaxError);
    let text = result.error_text.unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), input);
    assert!(lines.next().unwrap().contains('^'));
    assert!(lines.next().is_some());
}

#[test]
fn unrecognized_leading_keyword_reports_a_descriptive_message() {
    let result = parse("FROBNICATE x;");
    assert_eq!(result.code, ParseCode::SyntaxError);
    assert!(result
        .error_text
        .unwrap()
        .contains("Failed to recognize any valid SQL statement"));
}

#[test]
fn parsing_is_deterministic() {
    let input = "SELECT a, b FROM t WHERE a > 1 AND b IS NOT NULL;";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn disabling_statement_construction_preserves_grammar_acceptance() {
    for input in [
        "SELECT a FROM t;",
        "CREATE TABLE t (",
        "",
        "INSERT INTO t (a) VALUES (1);",
        "FROBNICATE;",
    ] {
        let with_ast = parse(input);
        let without_ast = sqltoast::parse_with_options(
            input,
            ParseOptions {
                disable_statement_construction: true,
                ..ParseOptions::default()
            },
        );
        assert_eq!(
            with_ast.code, without_ast.code,
            "mismatched code for input {input:?}"
        );
        assert!(without_ast.statements.is_empty());
    }
}

#[test]
fn lone_semicolons_parse_to_an_empty_statement_list() {
    let result = parse(";;;");
    assert_eq!(result.code, ParseCode::Ok);
    assert!(result.statements.is_empty());
}
