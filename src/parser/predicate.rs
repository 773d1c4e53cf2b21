//! Search conditions, boolean terms/factors, predicates, and row-value
//! constructors (§4.9).

use crate::ast::{
    BooleanFactor, BooleanPrimary, BooleanTerm, CompOp, Predicate, Quantifier, RowValueConstructor,
    RowValueConstructorElement, SearchCondition,
};
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_row_value_constructor_element(
        &mut self,
    ) -> PResult<Option<RowValueConstructorElement>> {
        if self.eat(Symbol::Null) {
            return Ok(Some(RowValueConstructorElement::Null));
        }
        if self.eat(Symbol::Default) {
            return Ok(Some(RowValueConstructorElement::Default));
        }
        Ok(self
            .parse_value_expression()?
            .map(|v| RowValueConstructorElement::ValueExpression(Box::new(v))))
    }

    /// A single element, a parenthesized comma-delimited list, or a row
    /// subquery (§4.9: "Row-value constructors have three shapes").
    fn parse_row_value_constructor(&mut self) -> PResult<Option<RowValueConstructor>> {
        if self.at(Symbol::Lparen) && self.peek_subquery_in_parens() {
            self.bump();
            let query = self.require_query_expression()?;
            self.expect(Symbol::Rparen)?;
            return Ok(Some(RowValueConstructor::Subquery(Box::new(query))));
        }
        if self.eat(Symbol::Lparen) {
            let mut elements = vec![self.require_row_value_constructor_element()?];
            while self.eat(Symbol::Comma) {
                elements.push(self.require_row_value_constructor_element()?);
            }
            self.expect(Symbol::Rparen)?;
            return Ok(Some(RowValueConstructor::List(elements)));
        }
        Ok(self
            .parse_row_value_constructor_element()?
            .map(RowValueConstructor::Element))
    }

    /// True if `(` is immediately followed by `SELECT` (a subquery rather
    /// than a parenthesized value list), without consuming anything.
    fn peek_subquery_in_parens(&self) -> bool {
        self.has_sequence(&[Symbol::Lparen, Symbol::Select])
    }

    fn require_row_value_constructor_element(&mut self) -> PResult<RowValueConstructorElement> {
        self.parse_row_value_constructor_element()?
            .ok_or_else(|| self.error_expected("a row value constructor element"))
    }

    pub(crate) fn require_row_value_constructor(&mut self) -> PResult<RowValueConstructor> {
        self.parse_row_value_constructor()?
            .ok_or_else(|| self.error_expected("<row value constructor>"))
    }

    fn parse_comp_op(&mut self) -> Option<CompOp> {
        let op = match self.symbol() {
            Symbol::Equal => CompOp::Equal,
            Symbol::NotEqual => CompOp::NotEqual,
            Symbol::LessThan => {
                // `<=` is `<` immediately followed by `=` with no lexer
                // support for the two-char form (§4.9).
                self.bump();
                if self.eat(Symbol::Equal) {
                    return Some(CompOp::LessOrEqual);
                }
                return Some(CompOp::LessThan);
            }
            Symbol::GreaterThan => {
                self.bump();
                if self.eat(Symbol::Equal) {
                    return Some(CompOp::GreaterOrEqual);
                }
                return Some(CompOp::GreaterThan);
            }
            Symbol::Exclamation => {
                // `!=` is `!` followed by `=` (§4.9).
                self.bump();
                if self.eat(Symbol::Equal) {
                    return Some(CompOp::NotEqual);
                }
                return None;
            }
            _ => return None,
        };
        self.bump();
        Some(op)
    }

    fn parse_quantifier(&mut self) -> Option<Quantifier> {
        let q = match self.symbol() {
            Symbol::Any => Quantifier::Any,
            Symbol::Some => Quantifier::Some,
            Symbol::All => Quantifier::All,
            _ => return None,
        };
        self.bump();
        Some(q)
    }

    /// Parses the part of a predicate that follows a left-hand row value
    /// constructor (comparison, `BETWEEN`, `IN`, `IS`, `LIKE`), handling the
    /// optional leading `NOT` that flips `reverse_op` (§4.9).
    fn parse_predicate_tail(
        &mut self,
        left: RowValueConstructor,
    ) -> PResult<Option<(Predicate, bool)>> {
        let negated = self.eat(Symbol::Not);
        if negated && self.at(Symbol::Is) {
            return Err(self.error("NOT IS is not a valid predicate"));
        }
        if let Some(op) = self.parse_comp_op() {
            if let Some(quantifier) = self.parse_quantifier() {
                let subquery = Box::new(self.require_subquery()?);
                return Ok(Some((
                    Predicate::QuantifiedComparison {
                        op,
                        left,
                        quantifier,
                        subquery,
                    },
                    negated,
                )));
            }
            let right = self.require_row_value_constructor()?;
            return Ok(Some((Predicate::Comparison { op, left, right }, negated)));
        }
        match self.symbol() {
            Symbol::Between => {
                self.bump();
                let low = self.require_row_value_constructor()?;
                self.expect(Symbol::And)?;
                let high = self.require_row_value_constructor()?;
                Ok(Some((
                    Predicate::Between {
                        operand: left,
                        low,
                        high,
                    },
                    negated,
                )))
            }
            Symbol::In => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                if self.at(Symbol::Select) {
                    let subquery = Box::new(self.require_query_expression()?);
                    self.expect(Symbol::Rparen)?;
                    return Ok(Some((
                        Predicate::InSubquery {
                            operand: left,
                            subquery,
                        },
                        negated,
                    )));
                }
                let mut values = vec![self.require_row_value_constructor()?];
                while self.eat(Symbol::Comma) {
                    values.push(self.require_row_value_constructor()?);
                }
                self.expect(Symbol::Rparen)?;
                Ok(Some((
                    Predicate::InValues {
                        operand: left,
                        values,
                    },
                    negated,
                )))
            }
            Symbol::Like => {
                self.bump();
                let operand = Box::new(self.row_value_constructor_as_value_expression(left)?);
                let pattern = Box::new(self.require_value_expression()?);
                let escape = if self.eat(Symbol::Escape) {
                    Some(Box::new(self.require_value_expression()?))
                } else {
                    None
                };
                Ok(Some((
                    Predicate::Like {
                        operand,
                        pattern,
                        escape,
                    },
                    negated,
                )))
            }
            Symbol::Is => {
                self.bump();
                // `negated` is always false here: a leading `NOT` before
                // `IS` is rejected above. The negation that matters for
                // `IS [NOT] NULL` sits between `IS` and `NULL`.
                let negated = self.eat(Symbol::Not);
                self.expect(Symbol::Null)?;
                Ok(Some((Predicate::Null { operand: left }, negated)))
            }
            Symbol::Overlaps => {
                self.bump();
                let right = self.require_row_value_constructor()?;
                Ok(Some((Predicate::Overlaps { left, right }, negated)))
            }
            Symbol::Match => {
                self.bump();
                let unique = self.eat(Symbol::Unique);
                let subquery = Box::new(self.require_subquery()?);
                Ok(Some((
                    Predicate::Match {
                        operand: left,
                        unique,
                        subquery,
                    },
                    negated,
                )))
            }
            _ => {
                if negated {
                    Err(self.error_expected(
                        "BETWEEN, IN, IS, LIKE, MATCH, OVERLAPS, or a comparison operator",
                    ))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// `LIKE`/`MATCH` need a scalar operand, not a full row constructor;
    /// this narrows a already-parsed [`RowValueConstructor::Element`] back
    /// down (it is a syntax error for `LIKE`'s left side to be a list or a
    /// subquery).
    fn row_value_constructor_as_value_expression(
        &mut self,
        rvc: RowValueConstructor,
    ) -> PResult<crate::ast::ValueExpression> {
        match rvc {
            RowValueConstructor::Element(RowValueConstructorElement::ValueExpression(v)) => Ok(*v),
            _ => Err(self.error("LIKE requires a value expression on its left side")),
        }
    }

    fn require_subquery(&mut self) -> PResult<crate::ast::QueryExpression> {
        self.expect(Symbol::Lparen)?;
        let query = self.require_query_expression()?;
        self.expect(Symbol::Rparen)?;
        Ok(query)
    }

    /// Predicates with no left-hand row value constructor at all: `EXISTS`,
    /// `UNIQUE` (§4.9).
    fn parse_left_operandless_predicate(&mut self) -> PResult<Option<Predicate>> {
        match self.symbol() {
            Symbol::Exists => {
                self.bump();
                Ok(Some(Predicate::Exists {
                    subquery: Box::new(self.require_subquery()?),
                }))
            }
            Symbol::Unique => {
                self.bump();
                Ok(Some(Predicate::Unique {
                    subquery: Box::new(self.require_subquery()?),
                }))
            }
            _ => Ok(None),
        }
    }

    fn parse_predicate(&mut self) -> PResult<Option<(Predicate, bool)>> {
        if let Some(predicate) = self.parse_left_operandless_predicate()? {
            return Ok(Some((predicate, false)));
        }
        let Some(left) = self.parse_row_value_constructor()? else {
            return Ok(None);
        };
        match self.parse_predicate_tail(left.clone())? {
            Some(result) => Ok(Some(result)),
            None => Err(self.error_expected(
                "BETWEEN, IN, IS, LIKE, MATCH, OVERLAPS, or a comparison operator",
            )),
        }
    }

    fn parse_boolean_primary(&mut self) -> PResult<Option<(BooleanPrimary, bool)>> {
        if self.eat(Symbol::Lparen) {
            let inner = self.require_search_condition()?;
            self.expect(Symbol::Rparen)?;
            return Ok(Some((
                BooleanPrimary::Parenthesized(Box::new(inner)),
                false,
            )));
        }
        Ok(self
            .parse_predicate()?
            .map(|(predicate, negated)| (BooleanPrimary::Predicate(predicate), negated)))
    }

    fn parse_boolean_factor(&mut self) -> PResult<Option<BooleanFactor>> {
        let leading_not = self.eat(Symbol::Not);
        let Some((primary, predicate_negated)) = self.parse_boolean_primary()? else {
            return if leading_not {
                Err(self.error_expected("a search condition"))
            } else {
                Ok(None)
            };
        };
        // A predicate's own trailing NOT (e.g. `x NOT BETWEEN a AND b`, `x
        // IS NOT NULL`) and a leading `NOT <boolean primary>` both flip the
        // sense of the factor; fold them together rather than double-negate.
        Ok(Some(BooleanFactor {
            reverse_op: leading_not ^ predicate_negated,
            primary,
        }))
    }

    fn parse_boolean_term(&mut self) -> PResult<Option<BooleanTerm>> {
        let Some(first) = self.parse_boolean_factor()? else {
            return Ok(None);
        };
        let mut factors = vec![first];
        while self.eat(Symbol::And) {
            factors.push(self.require_boolean_factor()?);
        }
        Ok(Some(BooleanTerm { factors }))
    }

    fn require_boolean_factor(&mut self) -> PResult<BooleanFactor> {
        self.parse_boolean_factor()?
            .ok_or_else(|| self.error_expected("a search condition"))
    }

    /// `<search condition>`: an OR-list of AND-chains (§3).
    pub(crate) fn parse_search_condition(&mut self) -> PResult<Option<SearchCondition>> {
        let Some(first) = self.parse_boolean_term()? else {
            return Ok(None);
        };
        let mut terms = vec![first];
        while self.eat(Symbol::Or) {
            terms.push(self.require_boolean_term()?);
        }
        Ok(Some(SearchCondition { terms }))
    }

    fn require_boolean_term(&mut self) -> PResult<BooleanTerm> {
        self.parse_boolean_term()?
            .ok_or_else(|| self.error_expected("a search condition"))
    }

    pub(crate) fn require_search_condition(&mut self) -> PResult<SearchCondition> {
        self.parse_search_condition()?
            .ok_or_else(|| self.error_expected("a search condition"))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{BooleanPrimary, Predicate, Statement};
    use crate::options::ParseOptions;
    use crate::parser::Parser;

    fn where_condition(sql: &str) -> crate::ast::SearchCondition {
        let mut parser = Parser::new(sql, ParseOptions::default());
        let stmt = parser
            .parse_statement()
            .unwrap()
            .expect("statement should parse");
        match stmt {
            Statement::Select(select) => *select
                .specification
                .table_expression
                .where_clause
                .expect("WHERE clause"),
            other => panic!("expected a SELECT statement, got {other:?}"),
        }
    }

    #[test]
    fn is_not_null_sets_reverse_op() {
        let cond = where_condition("SELECT a FROM t WHERE a IS NOT NULL;");
        let term = &cond.terms[0];
        let factor = &term.factors[0];
        assert!(factor.reverse_op);
        assert!(matches!(
            factor.primary,
            BooleanPrimary::Predicate(Predicate::Null { .. })
        ));
    }

    #[test]
    fn is_null_without_not_is_not_negated() {
        let cond = where_condition("SELECT a FROM t WHERE a IS NULL;");
        assert!(!cond.terms[0].factors[0].reverse_op);
    }

    #[test]
    fn not_between_sets_reverse_op() {
        let cond = where_condition("SELECT a FROM t WHERE a NOT BETWEEN 1 AND 10;");
        let factor = &cond.terms[0].factors[0];
        assert!(factor.reverse_op);
        assert!(matches!(
            factor.primary,
            BooleanPrimary::Predicate(Predicate::Between { .. })
        ));
    }

    #[test]
    fn leading_not_on_parenthesized_condition() {
        let cond = where_condition("SELECT a FROM t WHERE NOT (a = 1 OR b = 2);");
        let factor = &cond.terms[0].factors[0];
        assert!(factor.reverse_op);
        assert!(matches!(factor.primary, BooleanPrimary::Parenthesized(_)));
    }

    #[test]
    fn leading_not_and_predicate_not_cancel_out() {
        // `NOT a NOT BETWEEN ...` : the outer NOT and the predicate's own
        // NOT should fold with XOR rather than simply OR-ing true/true.
        let cond = where_condition("SELECT a FROM t WHERE NOT a NOT BETWEEN 1 AND 10;");
        assert!(!cond.terms[0].factors[0].reverse_op);
    }

    #[test]
    fn or_list_and_and_chain_are_left_to_right() {
        let cond = where_condition("SELECT a FROM t WHERE a = 1 AND b = 2 OR c = 3;");
        assert_eq!(cond.terms.len(), 2);
        assert_eq!(cond.terms[0].factors.len(), 2);
        assert_eq!(cond.terms[1].factors.len(), 1);
    }

    #[test]
    fn not_is_is_rejected() {
        let mut parser = Parser::new("SELECT a FROM t WHERE a NOT IS NULL;", ParseOptions::default());
        assert!(parser.parse_statement().is_err());
    }

    #[test]
    fn exists_subquery_predicate() {
        let cond = where_condition("SELECT a FROM t WHERE EXISTS (SELECT b FROM u);");
        assert!(matches!(
            cond.terms[0].factors[0].primary,
            BooleanPrimary::Predicate(Predicate::Exists { .. })
        ));
    }

    #[test]
    fn in_values_list() {
        let cond = where_condition("SELECT a FROM t WHERE a IN (1, 2, 3);");
        match &cond.terms[0].factors[0].primary {
            BooleanPrimary::Predicate(Predicate::InValues { values, .. }) => {
                assert_eq!(values.len(), 3);
            }
            other => panic!("expected InValues, got {other:?}"),
        }
    }

    #[test]
    fn comparison_operators_build_correct_op() {
        use crate::ast::CompOp;
        for (text, expected) in [
            ("=", CompOp::Equal),
            ("<>", CompOp::NotEqual),
            ("<", CompOp::LessThan),
            (">", CompOp::GreaterThan),
            ("<=", CompOp::LessOrEqual),
            (">=", CompOp::GreaterOrEqual),
            ("!=", CompOp::NotEqual),
        ] {
            let sql = format!("SELECT a FROM t WHERE a {text} 1;");
            let cond = where_condition(&sql);
            match &cond.terms[0].factors[0].primary {
                BooleanPrimary::Predicate(Predicate::Comparison { op, .. }) => {
                    assert_eq!(*op, expected, "operator {text}");
                }
                other => panic!("expected Comparison, got {other:?}"),
            }
        }
    }
}
