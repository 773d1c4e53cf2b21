//! Table references and joins.

use crate::ast::{Correlation, Join, JoinCondition, JoinType, TableReference, TableReferencePrimary};
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `[AS] <identifier> [( <column list> )]`. Derived tables require a
    /// correlation; base tables treat it as optional.
    fn parse_correlation(&mut self) -> PResult<Option<Correlation>> {
        self.eat(Symbol::As);
        if !self.at(Symbol::Identifier) {
            return Ok(None);
        }
        let alias = self.bump().span;
        let mut columns = Vec::new();
        if self.eat(Symbol::Lparen) {
            columns.push(self.expect_identifier()?);
            while self.eat(Symbol::Comma) {
                columns.push(self.expect_identifier()?);
            }
            self.expect(Symbol::Rparen)?;
        }
        Ok(Some(Correlation { alias, columns }))
    }

    fn require_correlation(&mut self) -> PResult<Correlation> {
        self.parse_correlation()?
            .ok_or_else(|| self.error_expected("a correlation name"))
    }

    fn parse_table_reference_primary(&mut self) -> PResult<Option<TableReferencePrimary>> {
        if self.eat(Symbol::Lparen) {
            let query = self.require_query_expression()?;
            self.expect(Symbol::Rparen)?;
            let correlation = self.require_correlation()?;
            return Ok(Some(TableReferencePrimary::Derived {
                query: Box::new(query),
                correlation,
            }));
        }
        if self.at(Symbol::Identifier) {
            let name = self.bump().span;
            let correlation = self.parse_correlation()?;
            return Ok(Some(TableReferencePrimary::Table { name, correlation }));
        }
        Ok(None)
    }

    fn require_table_reference_primary(&mut self) -> PResult<TableReferencePrimary> {
        self.parse_table_reference_primary()?
            .ok_or_else(|| self.error_expected("a table reference"))
    }

    /// The join-type keyword(s) preceding `JOIN`; `None` if this isn't a
    /// join at all.
    fn parse_join_type(&mut self) -> Option<JoinType> {
        match self.symbol() {
            Symbol::Join => Some(JoinType::Inner),
            Symbol::Inner => {
                self.bump();
                Some(JoinType::Inner)
            }
            Symbol::Left => {
                self.bump();
                self.eat(Symbol::Outer);
                Some(JoinType::Left)
            }
            Symbol::Right => {
                self.bump();
                self.eat(Symbol::Outer);
                Some(JoinType::Right)
            }
            Symbol::Full => {
                self.bump();
                self.eat(Symbol::Outer);
                Some(JoinType::Full)
            }
            Symbol::Cross => {
                self.bump();
                Some(JoinType::Cross)
            }
            Symbol::Natural => {
                self.bump();
                Some(JoinType::Natural)
            }
            Symbol::Union => {
                self.bump();
                Some(JoinType::Union)
            }
            _ => None,
        }
    }

    fn parse_join_condition(&mut self, join_type: JoinType) -> PResult<JoinCondition> {
        if matches!(
            join_type,
            JoinType::Cross | JoinType::Natural | JoinType::Union
        ) {
            return Ok(JoinCondition::None);
        }
        if self.eat(Symbol::On) {
            return Ok(JoinCondition::On(Box::new(self.require_search_condition()?)));
        }
        if self.eat(Symbol::Using) {
            self.expect(Symbol::Lparen)?;
            let mut columns = vec![self.expect_identifier()?];
            while self.eat(Symbol::Comma) {
                columns.push(self.expect_identifier()?);
            }
            self.expect(Symbol::Rparen)?;
            return Ok(JoinCondition::Using(columns));
        }
        Err(self.error_expected("ON or USING"))
    }

    fn parse_join(&mut self) -> PResult<Option<Join>> {
        let Some(join_type) = self.parse_join_type() else {
            return Ok(None);
        };
        self.expect(Symbol::Join)?;
        let table = self.require_table_reference_primary()?;
        let condition = self.parse_join_condition(join_type)?;
        Ok(Some(Join {
            join_type,
            table,
            condition,
        }))
    }

    /// A base or derived table, plus a left-associative chain of joins
    /// applied to it.
    pub(crate) fn parse_table_reference(&mut self) -> PResult<Option<TableReference>> {
        let Some(primary) = self.parse_table_reference_primary()? else {
            return Ok(None);
        };
        let mut joins = Vec::new();
        while let Some(join) = self.parse_join()? {
            joins.push(join);
        }
        Ok(Some(TableReference { primary, joins }))
    }

    pub(crate) fn require_table_reference(&mut self) -> PResult<TableReference> {
        self.parse_table_reference()?
            .ok_or_else(|| self.error_expected("a table reference"))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{JoinCondition, JoinType, TableReferencePrimary};
    use crate::options::ParseOptions;
    use crate::parser::Parser;

    fn table_reference(sql: &str) -> crate::ast::TableReference {
        let mut parser = Parser::new(sql, ParseOptions::default());
        parser
            .parse_table_reference()
            .unwrap()
            .expect("table reference should parse")
    }

    #[test]
    fn bare_table_name() {
        let tr = table_reference("t");
        assert!(matches!(
            tr.primary,
            TableReferencePrimary::Table { correlation: None, .. }
        ));
        assert!(tr.joins.is_empty());
    }

    #[test]
    fn table_with_correlation() {
        let tr = table_reference("t AS a (x, y)");
        match tr.primary {
            TableReferencePrimary::Table {
                correlation: Some(correlation),
                ..
            } => assert_eq!(correlation.columns.len(), 2),
            other => panic!("expected table with correlation, got {other:?}"),
        }
    }

    #[test]
    fn derived_table_requires_correlation() {
        let mut parser = Parser::new("(SELECT a FROM t)", ParseOptions::default());
        assert!(parser.parse_table_reference().is_err());
    }

    #[test]
    fn derived_table_with_correlation() {
        let tr = table_reference("(SELECT a FROM t) dt");
        assert!(matches!(
            tr.primary,
            TableReferencePrimary::Derived { .. }
        ));
    }

    #[test]
    fn inner_join_with_on_condition() {
        let tr = table_reference("a JOIN b ON a.x = b.x");
        assert_eq!(tr.joins.len(), 1);
        assert_eq!(tr.joins[0].join_type, JoinType::Inner);
        assert!(matches!(tr.joins[0].condition, JoinCondition::On(_)));
    }

    #[test]
    fn left_outer_join_with_using() {
        let tr = table_reference("a LEFT OUTER JOIN b USING (id)");
        assert_eq!(tr.joins[0].join_type, JoinType::Left);
        match &tr.joins[0].condition {
            JoinCondition::Using(cols) => assert_eq!(cols.len(), 1),
            other => panic!("expected USING condition, got {other:?}"),
        }
    }

    #[test]
    fn cross_join_has_no_condition() {
        let tr = table_reference("a CROSS JOIN b");
        assert!(matches!(tr.joins[0].condition, JoinCondition::None));
    }

    #[test]
    fn chained_joins_are_left_associative() {
        let tr = table_reference("a JOIN b ON a.x = b.x JOIN c ON b.y = c.y");
        assert_eq!(tr.joins.len(), 2);
    }
}
