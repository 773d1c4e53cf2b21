use crate::ast::{SelectStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `SELECT [DISTINCT|ALL] <select list> FROM <table refs> [WHERE …]
    /// [GROUP BY …] [HAVING …]` (§4.8). The query specification grammar
    /// itself lives in `parser::query_expression`; this wraps it as a
    /// top-level statement and enforces the trailing `;`/EOS.
    pub(crate) fn parse_select_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.at(Symbol::Select) {
            return Ok(None);
        }
        let specification = self
            .parse_query_specification()?
            .ok_or_else(|| self.error_expected("a query specification"))?;
        self.expect_statement_end()?;
        Ok(Some(Statement::Select(SelectStatement { specification })))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn distinct_select_with_grouping_joins_and_predicates() {
        let result = parse(
            "SELECT DISTINCT a, b AS bb FROM t1, t2 WHERE a > 1 AND b IS NOT NULL \
             GROUP BY a HAVING COUNT(*) > 2;",
        );
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::Select(stmt) = &result.statements[0] else {
            panic!("expected Select");
        };
        let spec = &stmt.specification;
        assert!(spec.distinct);
        assert_eq!(spec.selected_columns.len(), 2);
        assert_eq!(spec.table_expression.referenced_tables.len(), 2);
        assert_eq!(spec.table_expression.group_by.len(), 1);
        assert!(spec.table_expression.having.is_some());
        let where_clause = spec.table_expression.where_clause.as_ref().unwrap();
        assert_eq!(where_clause.terms.len(), 1);
        assert_eq!(where_clause.terms[0].factors.len(), 2);
    }

    #[test]
    fn missing_from_clause_is_a_syntax_error() {
        let result = parse("SELECT a;");
        assert_eq!(result.code, ParseCode::SyntaxError);
    }
}
