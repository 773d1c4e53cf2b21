//! Black-box coverage for `CREATE SCHEMA` / `DROP SCHEMA` (§4.8, §8).

use sqltoast::ast::{DropBehaviour, Statement};
use sqltoast::{parse, ParseCode};

fn text<'a>(input: &'a str, span: sqltoast::Span) -> &'a str {
    span.text(input)
}

#[test]
fn create_schema_with_authorization_and_default_charset() {
    let input = "CREATE SCHEMA s AUTHORIZATION u DEFAULT CHARACTER SET utf8;";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::Ok);
    assert_eq!(result.statements.len(), 1);
    let Statement::CreateSchema(stmt) = &result.statements[0] else {
        panic!("expected CreateSchema, got {:?}", result.statements[0]);
    };
    assert_eq!(text(input, stmt.schema_name.unwrap()), "s");
    assert_eq!(text(input, stmt.authorization_identifier.unwrap()), "u");
    assert_eq!(text(input, stmt.default_charset.unwrap()), "utf8");
}

#[test]
fn create_schema_with_only_authorization_is_legal() {
    let result = parse("CREATE SCHEMA AUTHORIZATION u;");
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::CreateSchema(stmt) = &result.statements[0] else {
        panic!("expected CreateSchema");
    };
    assert!(stmt.schema_name.is_none());
    assert!(stmt.authorization_identifier.is_some());
}

#[test]
fn create_schema_with_neither_name_nor_authorization_is_a_syntax_error() {
    let result = parse("CREATE SCHEMA;");
    assert_eq!(result.code, ParseCode::SyntaxError);
}

#[test]
fn drop_schema_default_behaviour_is_cascade() {
    let result = parse("DROP SCHEMA s;");
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::DropSchema(stmt) = &result.statements[0] else {
        panic!("expected DropSchema");
    };
    assert_eq!(stmt.behaviour, DropBehaviour::Cascade);
}

#[test]
fn drop_schema_explicit_restrict() {
    let result = parse("DROP SCHEMA s RESTRICT;");
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::DropSchema(stmt) = &result.statements[0] else {
        panic!("expected DropSchema");
    };
    assert_eq!(stmt.behaviour, DropBehaviour::Restrict);
}

#[test]
fn mixed_case_keywords_parse_like_upper_case() {
    let lower = parse("create schema s authorization u;");
    let mixed = parse("CrEaTe SchEMa s AuThOrIzAtIoN u;");
    assert_eq!(lower.code, ParseCode::Ok);
    assert_eq!(mixed.code, ParseCode::Ok);
    assert_eq!(lower.statements.len(), mixed.statements.len());
}
