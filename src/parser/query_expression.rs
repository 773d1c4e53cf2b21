//! `SELECT`, table expressions, and query primaries.

use crate::ast::{
    NonJoinQueryExpression, NonJoinQueryPrimary, QueryExpression, QuerySpecification,
    SelectedColumn, TableExpression,
};
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_selected_column(&mut self) -> PResult<Option<SelectedColumn>> {
        if self.eat(Symbol::Asterisk) {
            return Ok(Some(SelectedColumn::Asterisk));
        }
        let Some(expression) = self.parse_value_expression()? else {
            return Ok(None);
        };
        let alias = if self.eat(Symbol::As) {
            Some(self.expect_identifier()?)
        } else if self.at(Symbol::Identifier) {
            Some(self.bump().span)
        } else {
            None
        };
        Ok(Some(SelectedColumn::Expression {
            expression: Box::new(expression),
            alias,
        }))
    }

    fn require_selected_column(&mut self) -> PResult<SelectedColumn> {
        self.parse_selected_column()?
            .ok_or_else(|| self.error_expected("a select list item"))
    }

    /// `<group by clause>`: a comma-delimited column-reference list.
    fn parse_group_by(&mut self) -> PResult<Vec<crate::span::Span>> {
        if !self.has_sequence(&[Symbol::Group, Symbol::By]) {
            return Ok(Vec::new());
        }
        self.bump();
        self.bump();
        let mut columns = vec![self.expect_identifier()?];
        while self.eat(Symbol::Comma) {
            columns.push(self.expect_identifier()?);
        }
        Ok(columns)
    }

    fn parse_table_expression(&mut self) -> PResult<TableExpression> {
        self.expect(Symbol::From)?;
        let mut referenced_tables = vec![self.require_table_reference()?];
        while self.eat(Symbol::Comma) {
            referenced_tables.push(self.require_table_reference()?);
        }
        let where_clause = if self.eat(Symbol::Where) {
            Some(Box::new(self.require_search_condition()?))
        } else {
            None
        };
        let group_by = self.parse_group_by()?;
        let having = if self.eat(Symbol::Having) {
            Some(Box::new(self.require_search_condition()?))
        } else {
            None
        };
        Ok(TableExpression {
            referenced_tables,
            where_clause,
            group_by,
            having,
        })
    }

    /// `SELECT [DISTINCT|ALL] <select list> <table expression>`.
    pub(crate) fn parse_query_specification(&mut self) -> PResult<Option<QuerySpecification>> {
        if !self.eat(Symbol::Select) {
            return Ok(None);
        }
        let distinct = if self.eat(Symbol::Distinct) {
            true
        } else {
            self.eat(Symbol::All);
            false
        };
        let mut selected_columns = vec![self.require_selected_column()?];
        while self.eat(Symbol::Comma) {
            selected_columns.push(self.require_selected_column()?);
        }
        let table_expression = self.parse_table_expression()?;
        Ok(Some(QuerySpecification {
            distinct,
            selected_columns,
            table_expression,
        }))
    }

    fn parse_table_value_constructor(&mut self) -> PResult<Option<NonJoinQueryPrimary>> {
        if !self.eat(Symbol::Values) {
            return Ok(None);
        }
        let mut rows = vec![self.require_row_value_constructor()?];
        while self.eat(Symbol::Comma) {
            rows.push(self.require_row_value_constructor()?);
        }
        Ok(Some(NonJoinQueryPrimary::TableValueConstructor(rows)))
    }

    fn parse_explicit_table(&mut self) -> PResult<Option<NonJoinQueryPrimary>> {
        if !self.eat(Symbol::Table) {
            return Ok(None);
        }
        Ok(Some(NonJoinQueryPrimary::ExplicitTable(
            self.expect_identifier()?,
        )))
    }

    fn parse_non_join_query_primary(&mut self) -> PResult<Option<NonJoinQueryPrimary>> {
        if self.eat(Symbol::Lparen) {
            let inner = self.require_non_join_query_expression()?;
            self.expect(Symbol::Rparen)?;
            return Ok(Some(NonJoinQueryPrimary::Parenthesized(Box::new(inner))));
        }
        if let Some(spec) = self.parse_query_specification()? {
            return Ok(Some(NonJoinQueryPrimary::QuerySpecification(Box::new(
                spec,
            ))));
        }
        if let Some(tvc) = self.parse_table_value_constructor()? {
            return Ok(Some(tvc));
        }
        self.parse_explicit_table()
    }

    fn parse_non_join_query_expression(&mut self) -> PResult<Option<NonJoinQueryExpression>> {
        Ok(self
            .parse_non_join_query_primary()?
            .map(|primary| NonJoinQueryExpression { primary }))
    }

    fn require_non_join_query_expression(&mut self) -> PResult<NonJoinQueryExpression> {
        self.parse_non_join_query_expression()?
            .ok_or_else(|| self.error_expected("a query expression"))
    }

    /// `<query expression>`: a joined table reference chain with no
    /// `SELECT`, or (far more commonly) a `non_join_query_expression`.
    pub(crate) fn parse_query_expression(&mut self) -> PResult<Option<QueryExpression>> {
        if let Some(non_join) = self.parse_non_join_query_expression()? {
            return Ok(Some(QueryExpression::NonJoin(non_join)));
        }
        // A bare table name is only a valid query expression if it is
        // actually the head of a join chain; a lone identifier with no
        // following join keyword is not a query expression at all.
        if self.at(Symbol::Identifier) {
            let cp = self.checkpoint();
            let table_ref = self.parse_table_reference()?;
            if let Some(table_ref) = table_ref {
                if table_ref.joins.is_empty() {
                    self.restore(cp);
                } else {
                    return Ok(Some(QueryExpression::Joined(Box::new(table_ref))));
                }
            }
        }
        Ok(None)
    }

    pub(crate) fn require_query_expression(&mut self) -> PResult<QueryExpression> {
        self.parse_query_expression()?
            .ok_or_else(|| self.error_expected("a query expression"))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{NonJoinQueryPrimary, QueryExpression, SelectedColumn};
    use crate::options::ParseOptions;
    use crate::parser::Parser;

    #[test]
    fn distinct_select_list_with_alias() {
        let mut parser = Parser::new(
            "SELECT DISTINCT a, b AS bb FROM t",
            ParseOptions::default(),
        );
        let spec = parser
            .parse_query_specification()
            .unwrap()
            .expect("query specification should parse");
        assert!(spec.distinct);
        assert_eq!(spec.selected_columns.len(), 2);
        match &spec.selected_columns[1] {
            SelectedColumn::Expression { alias, .. } => assert!(alias.is_some()),
            other => panic!("expected aliased expression, got {other:?}"),
        }
    }

    #[test]
    fn asterisk_select_list() {
        let mut parser = Parser::new("SELECT * FROM t", ParseOptions::default());
        let spec = parser
            .parse_query_specification()
            .unwrap()
            .expect("query specification should parse");
        assert!(matches!(
            spec.selected_columns[0],
            SelectedColumn::Asterisk
        ));
    }

    #[test]
    fn group_by_and_having() {
        let mut parser = Parser::new(
            "SELECT a FROM t GROUP BY a HAVING COUNT(*) > 2",
            ParseOptions::default(),
        );
        let spec = parser
            .parse_query_specification()
            .unwrap()
            .expect("query specification should parse");
        assert_eq!(spec.table_expression.group_by.len(), 1);
        assert!(spec.table_expression.having.is_some());
    }

    #[test]
    fn table_value_constructor() {
        let mut parser = Parser::new("VALUES (1, 2), (3, 4)", ParseOptions::default());
        let expr = parser
            .parse_query_expression()
            .unwrap()
            .expect("query expression should parse");
        match expr {
            QueryExpression::NonJoin(non_join) => match non_join.primary {
                NonJoinQueryPrimary::TableValueConstructor(rows) => assert_eq!(rows.len(), 2),
                other => panic!("expected table value constructor, got {other:?}"),
            },
            other => panic!("expected non-join query expression, got {other:?}"),
        }
    }

    #[test]
    fn explicit_table() {
        let mut parser = Parser::new("TABLE t", ParseOptions::default());
        let expr = parser
            .parse_query_expression()
            .unwrap()
            .expect("query expression should parse");
        assert!(matches!(
            expr,
            QueryExpression::NonJoin(non_join) if matches!(
                non_join.primary,
                NonJoinQueryPrimary::ExplicitTable(_)
            )
        ));
    }

    #[test]
    fn bare_identifier_is_not_a_query_expression() {
        let mut parser = Parser::new("t", ParseOptions::default());
        assert_eq!(parser.parse_query_expression().unwrap(), None);
    }

    #[test]
    fn joined_table_with_no_select_is_a_query_expression() {
        let mut parser = Parser::new("a JOIN b ON a.x = b.x", ParseOptions::default());
        let expr = parser
            .parse_query_expression()
            .unwrap()
            .expect("query expression should parse");
        assert!(matches!(expr, QueryExpression::Joined(_)));
    }
}
