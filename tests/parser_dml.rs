//! Black-box coverage for `INSERT`, `DELETE`, `UPDATE` (§4.8, §8).

use sqltoast::ast::{InsertSource, Statement, UpdateValue};
use sqltoast::{parse, ParseCode};

fn text<'a>(input: &'a str, span: sqltoast::Span) -> &'a str {
    span.text(input)
}

#[test]
fn insert_with_explicit_column_list_and_values() {
    let input = "INSERT INTO t (a, b) VALUES (1, 2);";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::Insert(stmt) = &result.statements[0] else {
        panic!("expected Insert");
    };
    assert_eq!(text(input, stmt.table_name), "t");
    assert_eq!(stmt.columns.len(), 2);
    assert!(matches!(stmt.source, InsertSource::Query(_)));
}

#[test]
fn insert_default_values_with_no_column_list() {
    let result = parse("INSERT INTO t DEFAULT VALUES;");
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::Insert(stmt) = &result.statements[0] else {
        panic!("expected Insert");
    };
    assert!(stmt.columns.is_empty());
    assert!(matches!(stmt.source, InsertSource::DefaultValues));
}

#[test]
fn delete_with_where_clause() {
    let input = "DELETE FROM t WHERE a = 1;";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::Delete(stmt) = &result.statements[0] else {
        panic!("expected Delete");
    };
    assert_eq!(text(input, stmt.table_name), "t");
    assert!(stmt.where_clause.is_some());
}

#[test]
fn delete_without_where_deletes_unconditionally() {
    let result = parse("DELETE FROM t;");
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::Delete(stmt) = &result.statements[0] else {
        panic!("expected Delete");
    };
    assert!(stmt.where_clause.is_none());
}

#[test]
fn update_with_multiple_assignments_including_null_and_default() {
    let input = "UPDATE t SET a = 1, b = NULL, c = DEFAULT WHERE id = 7;";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::Ok);
    let Statement::Update(stmt) = &result.statements[0] else {
        panic!("expected Update");
    };
    assert_eq!(stmt.assignments.len(), 3);
    assert!(matches!(stmt.assignments[0].value, UpdateValue::Value(_)));
    assert!(matches!(stmt.assignments[1].value, UpdateValue::Null));
    assert!(matches!(stmt.assignments[2].value, UpdateValue::Default));
    assert!(stmt.where_clause.is_some());
}

#[test]
fn commit_and_rollback_with_optional_work() {
    let result = parse("COMMIT WORK; ROLLBACK;");
    assert_eq!(result.code, ParseCode::Ok);
    assert_eq!(result.statements.len(), 2);
    assert!(matches!(result.statements[0], Statement::Commit(_)));
    assert!(matches!(result.statements[1], Statement::Rollback(_)));
}
