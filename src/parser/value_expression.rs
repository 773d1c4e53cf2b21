//! Numeric/character/datetime/interval value expressions (§4.9).
//!
//! The grammar is type-ambiguous without semantic analysis (out of scope,
//! §1): `a + b` could be numeric or (in a dialect with date arithmetic)
//! datetime. This parser always folds the `+`/`-`/`*`/`/` chain the same
//! way and then classifies the result: a `||` chain always yields
//! [`CharacterValueExpression`]; an add-chain whose head primary is a
//! datetime function yields [`DatetimeValueExpression`] (interpreting the
//! `+`/`-` operands as interval terms, per §4.9); everything else is
//! [`NumericValueExpression`]. [`IntervalValueExpression`] exists in the
//! AST for data-model completeness (§3) but is not produced by this
//! classification — see DESIGN.md.

use crate::ast::{
    AddOp, CaseExpression, CharacterValueExpression, DatetimeValueExpression,
    DatetimeValueFunction, ExtractField, Literal, MulOp, NumericFactor, NumericTerm,
    NumericValueExpression, NumericValueFunction, SetFunctionKind, SetFunctionSpecification, Sign,
    StringValueFunction, TrimSpec, ValueExpression, ValueExpressionPrimary, WhenClause,
    WhenCondition,
};
use crate::symbol::Symbol;

use super::{PResult, Parser};

fn is_datetime_function(primary: &ValueExpressionPrimary) -> bool {
    matches!(primary, ValueExpressionPrimary::DatetimeFunction(_))
}

impl<'a> Parser<'a> {
    fn parse_literal(&mut self) -> Option<Literal> {
        let span = self.span();
        let literal = match self.symbol() {
            Symbol::LiteralCharacterString => Literal::CharacterString(span),
            Symbol::LiteralNationalCharacterString => Literal::NationalCharacterString(span),
            Symbol::LiteralBitString => Literal::BitString(span),
            Symbol::LiteralHexString => Literal::HexString(span),
            Symbol::LiteralUnsignedInteger => Literal::UnsignedInteger(span),
            Symbol::LiteralSignedInteger => Literal::SignedInteger(span),
            Symbol::LiteralUnsignedDecimal => Literal::UnsignedDecimal(span),
            Symbol::LiteralSignedDecimal => Literal::SignedDecimal(span),
            Symbol::LiteralApproximateNumber => Literal::ApproximateNumber(span),
            _ => return None,
        };
        self.bump();
        Some(literal)
    }

    fn parse_set_function(&mut self) -> PResult<Option<SetFunctionSpecification>> {
        let kind = match self.symbol() {
            Symbol::Count => SetFunctionKind::Count,
            Symbol::Sum => SetFunctionKind::Sum,
            Symbol::Avg => SetFunctionKind::Avg,
            Symbol::Min => SetFunctionKind::Min,
            Symbol::Max => SetFunctionKind::Max,
            _ => return Ok(None),
        };
        self.bump();
        self.expect(Symbol::Lparen)?;
        if matches!(kind, SetFunctionKind::Count) && self.eat(Symbol::Asterisk) {
            self.expect(Symbol::Rparen)?;
            return Ok(Some(SetFunctionSpecification {
                kind: SetFunctionKind::CountStar,
                distinct: false,
                argument: None,
            }));
        }
        let distinct = self.eat(Symbol::Distinct);
        let _ = self.eat(Symbol::All);
        let argument = self.require_value_expression()?;
        self.expect(Symbol::Rparen)?;
        Ok(Some(SetFunctionSpecification {
            kind,
            distinct,
            argument: Some(Box::new(argument)),
        }))
    }

    fn parse_case_expression(&mut self) -> PResult<Option<CaseExpression>> {
        if !self.eat(Symbol::Case) {
            return Ok(None);
        }
        let operand = if self.at(Symbol::When) {
            None
        } else {
            Some(Box::new(self.require_value_expression()?))
        };
        let mut when_clauses = Vec::new();
        while self.eat(Symbol::When) {
            let condition = if operand.is_some() {
                WhenCondition::Value(Box::new(self.require_value_expression()?))
            } else {
                WhenCondition::Search(Box::new(self.require_search_condition()?))
            };
            self.expect(Symbol::Then)?;
            let result = Box::new(self.require_value_expression()?);
            when_clauses.push(WhenClause { condition, result });
        }
        if when_clauses.is_empty() {
            return Err(self.error_expected("at least one WHEN clause"));
        }
        let else_result = if self.eat(Symbol::Else) {
            Some(Box::new(self.require_value_expression()?))
        } else {
            None
        };
        self.expect(Symbol::End)?;
        Ok(Some(CaseExpression {
            operand,
            when_clauses,
            else_result,
        }))
    }

    fn parse_trim_spec(&mut self) -> Option<TrimSpec> {
        match self.symbol() {
            Symbol::Leading => {
                self.bump();
                Some(TrimSpec::Leading)
            }
            Symbol::Trailing => {
                self.bump();
                Some(TrimSpec::Trailing)
            }
            Symbol::Both => {
                self.bump();
                Some(TrimSpec::Both)
            }
            _ => None,
        }
    }

    fn parse_string_function(&mut self) -> PResult<Option<StringValueFunction>> {
        match self.symbol() {
            Symbol::Substring => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let source = Box::new(self.require_value_expression()?);
                self.expect(Symbol::From)?;
                let start = Box::new(self.require_value_expression()?);
                let length = if self.eat(Symbol::For) {
                    Some(Box::new(self.require_value_expression()?))
                } else {
                    None
                };
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Substring {
                    source,
                    start,
                    length,
                }))
            }
            Symbol::Upper => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Upper(value)))
            }
            Symbol::Lower => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Lower(value)))
            }
            Symbol::Convert => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Using)?;
                let charset = self.expect_identifier()?;
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Convert { value, charset }))
            }
            Symbol::Translate => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Using)?;
                let translation = self.expect_identifier()?;
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Translate { value, translation }))
            }
            Symbol::Trim => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let spec = self.parse_trim_spec();
                // `TRIM ( [spec] [<character>] FROM <source> )` or, with no
                // `FROM`, `TRIM ( <source> )`: parse one value expression
                // and reinterpret it as the leading `<character>` only if a
                // `FROM` follows.
                let first = self.require_value_expression()?;
                let (character, source) = if self.eat(Symbol::From) {
                    (Some(Box::new(first)), Box::new(self.require_value_expression()?))
                } else {
                    (None, Box::new(first))
                };
                self.expect(Symbol::Rparen)?;
                Ok(Some(StringValueFunction::Trim {
                    spec,
                    character,
                    source,
                }))
            }
            _ => Ok(None),
        }
    }

    fn parse_extract_field(&mut self) -> PResult<ExtractField> {
        let field = match self.symbol() {
            Symbol::Year => ExtractField::Year,
            Symbol::Month => ExtractField::Month,
            Symbol::Day => ExtractField::Day,
            Symbol::Hour => ExtractField::Hour,
            Symbol::Minute => ExtractField::Minute,
            Symbol::Second => ExtractField::Second,
            _ => return Err(self.error_expected("an extract field (YEAR, MONTH, DAY, HOUR, MINUTE, or SECOND)")),
        };
        self.bump();
        Ok(field)
    }

    fn parse_numeric_function(&mut self) -> PResult<Option<NumericValueFunction>> {
        match self.symbol() {
            Symbol::Position => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let needle = Box::new(self.require_value_expression()?);
                self.expect(Symbol::In)?;
                let haystack = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(NumericValueFunction::Position { needle, haystack }))
            }
            Symbol::Extract => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let field = self.parse_extract_field()?;
                self.expect(Symbol::From)?;
                let source = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(NumericValueFunction::Extract { field, source }))
            }
            Symbol::CharLength | Symbol::CharacterLength => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(NumericValueFunction::CharLength(value)))
            }
            Symbol::BitLength => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(NumericValueFunction::BitLength(value)))
            }
            Symbol::OctetLength => {
                self.bump();
                self.expect(Symbol::Lparen)?;
                let value = Box::new(self.require_value_expression()?);
                self.expect(Symbol::Rparen)?;
                Ok(Some(NumericValueFunction::OctetLength(value)))
            }
            _ => Ok(None),
        }
    }

    fn parse_datetime_function(&mut self) -> PResult<Option<DatetimeValueFunction>> {
        match self.symbol() {
            Symbol::CurrentDate => {
                self.bump();
                Ok(Some(DatetimeValueFunction::CurrentDate))
            }
            Symbol::CurrentTime => {
                self.bump();
                let precision = self.parse_optional_parenthesized_precision()?;
                Ok(Some(DatetimeValueFunction::CurrentTime { precision }))
            }
            Symbol::CurrentTimestamp => {
                self.bump();
                let precision = self.parse_optional_parenthesized_precision()?;
                Ok(Some(DatetimeValueFunction::CurrentTimestamp { precision }))
            }
            _ => Ok(None),
        }
    }

    pub(crate) fn parse_optional_parenthesized_precision(&mut self) -> PResult<Option<u64>> {
        if !self.eat(Symbol::Lparen) {
            return Ok(None);
        }
        let n = self.expect_unsigned_integer()?;
        self.expect(Symbol::Rparen)?;
        Ok(Some(n))
    }

    /// A `<value expression primary>`: the leaf of every value-expression
    /// family (§3 "AST — value expressions").
    fn parse_value_expression_primary(&mut self) -> PResult<Option<ValueExpressionPrimary>> {
        if let Some(literal) = self.parse_literal() {
            return Ok(Some(ValueExpressionPrimary::Literal(literal)));
        }
        if self.eat(Symbol::Lparen) {
            if self.at(Symbol::Select) {
                let query = self.require_query_expression()?;
                self.expect(Symbol::Rparen)?;
                return Ok(Some(ValueExpressionPrimary::ScalarSubquery(Box::new(
                    query,
                ))));
            }
            let inner = self.require_value_expression()?;
            self.expect(Symbol::Rparen)?;
            return Ok(Some(ValueExpressionPrimary::Parenthesized(Box::new(
                inner,
            ))));
        }
        if let Some(set_function) = self.parse_set_function()? {
            return Ok(Some(ValueExpressionPrimary::SetFunction(set_function)));
        }
        if let Some(case_expr) = self.parse_case_expression()? {
            return Ok(Some(ValueExpressionPrimary::Case(case_expr)));
        }
        if self.eat(Symbol::Nullif) {
            self.expect(Symbol::Lparen)?;
            let value1 = Box::new(self.require_value_expression()?);
            self.expect(Symbol::Comma)?;
            let value2 = Box::new(self.require_value_expression()?);
            self.expect(Symbol::Rparen)?;
            return Ok(Some(ValueExpressionPrimary::Nullif { value1, value2 }));
        }
        if self.eat(Symbol::Coalesce) {
            self.expect(Symbol::Lparen)?;
            let mut values = vec![self.require_value_expression()?];
            while self.eat(Symbol::Comma) {
                values.push(self.require_value_expression()?);
            }
            self.expect(Symbol::Rparen)?;
            return Ok(Some(ValueExpressionPrimary::Coalesce(values)));
        }
        if let Some(func) = self.parse_string_function()? {
            return Ok(Some(ValueExpressionPrimary::StringFunction(func)));
        }
        if let Some(func) = self.parse_numeric_function()? {
            return Ok(Some(ValueExpressionPrimary::NumericFunction(func)));
        }
        if let Some(func) = self.parse_datetime_function()? {
            return Ok(Some(ValueExpressionPrimary::DatetimeFunction(func)));
        }
        if self.at(Symbol::Identifier) {
            let span = self.bump().span;
            return Ok(Some(ValueExpressionPrimary::ColumnReference(span)));
        }
        Ok(None)
    }

    fn require_value_expression_primary(&mut self) -> PResult<ValueExpressionPrimary> {
        self.parse_value_expression_primary()?
            .ok_or_else(|| self.error_expected("a value expression"))
    }

    fn parse_numeric_factor(&mut self) -> PResult<Option<NumericFactor>> {
        let sign = match self.symbol() {
            Symbol::Plus => {
                self.bump();
                Some(Sign::Plus)
            }
            Symbol::Minus => {
                self.bump();
                Some(Sign::Minus)
            }
            _ => None,
        };
        let Some(primary) = self.parse_value_expression_primary()? else {
            return if sign.is_some() {
                Err(self.error_expected("a value expression primary"))
            } else {
                Ok(None)
            };
        };
        Ok(Some(NumericFactor {
            sign,
            primary: Box::new(primary),
        }))
    }

    fn require_numeric_factor(&mut self) -> PResult<NumericFactor> {
        self.parse_numeric_factor()?
            .ok_or_else(|| self.error_expected("a value expression"))
    }

    fn parse_numeric_term(&mut self) -> PResult<Option<NumericTerm>> {
        let Some(first) = self.parse_numeric_factor()? else {
            return Ok(None);
        };
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(Symbol::Asterisk) {
                MulOp::Multiply
            } else if self.eat(Symbol::Solidus) {
                MulOp::Divide
            } else {
                break;
            };
            rest.push((op, self.require_numeric_factor()?));
        }
        Ok(Some(NumericTerm { first, rest }))
    }

    /// `<value expression>` (§4.9): folds a left-associative operator chain
    /// and classifies the result (see module docs).
    pub(crate) fn parse_value_expression(&mut self) -> PResult<Option<ValueExpression>> {
        let Some(first_term) = self.parse_numeric_term()? else {
            return Ok(None);
        };
        if self.at(Symbol::Concatenation) && first_term.rest.is_empty() {
            let mut concatenations = Vec::new();
            while self.eat(Symbol::Concatenation) {
                concatenations.push(self.require_value_expression_primary()?);
            }
            return Ok(Some(ValueExpression::Character(CharacterValueExpression {
                first: first_term.first.primary,
                concatenations,
            })));
        }
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(Symbol::Plus) {
                AddOp::Add
            } else if self.eat(Symbol::Minus) {
                AddOp::Subtract
            } else {
                break;
            };
            rest.push((op, self.parse_numeric_term()?.ok_or_else(|| {
                self.error_expected("a value expression")
            })?));
        }
        if is_datetime_function(&first_term.first.primary)
            && rest.iter().all(|(_, t)| t.rest.is_empty())
        {
            let operations = rest
                .into_iter()
                .map(|(op, t)| {
                    (
                        op,
                        crate::ast::IntervalTerm {
                            sign: t.first.sign,
                            primary: t.first.primary,
                        },
                    )
                })
                .collect();
            return Ok(Some(ValueExpression::Datetime(DatetimeValueExpression {
                primary: first_term.first.primary,
                operations,
            })));
        }
        Ok(Some(ValueExpression::Numeric(NumericValueExpression {
            first: first_term,
            rest,
        })))
    }

    pub(crate) fn require_value_expression(&mut self) -> PResult<ValueExpression> {
        self.parse_value_expression()?
            .ok_or_else(|| self.error_expected("a value expression"))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        AddOp, CharacterValueExpression, DatetimeValueExpression, MulOp, NumericValueExpression,
        SetFunctionKind, ValueExpression, ValueExpressionPrimary,
    };
    use crate::options::ParseOptions;
    use crate::parser::Parser;

    fn expr(sql: &str) -> ValueExpression {
        let mut parser = Parser::new(sql, ParseOptions::default());
        parser
            .parse_value_expression()
            .unwrap()
            .expect("value expression should parse")
    }

    #[test]
    fn numeric_add_and_mul_fold_left_associatively() {
        match expr("1 + 2 * 3 - 4") {
            ValueExpression::Numeric(NumericValueExpression { first, rest }) => {
                assert_eq!(first.rest.len(), 0);
                assert_eq!(rest.len(), 2);
                assert_eq!(rest[0].0, AddOp::Add);
                assert_eq!(rest[0].1.rest.len(), 1);
                assert_eq!(rest[0].1.rest[0].0, MulOp::Multiply);
                assert_eq!(rest[1].0, AddOp::Subtract);
            }
            other => panic!("expected numeric expression, got {other:?}"),
        }
    }

    #[test]
    fn concatenation_yields_character_value_expression() {
        match expr("a || b || c") {
            ValueExpression::Character(CharacterValueExpression { concatenations, .. }) => {
                assert_eq!(concatenations.len(), 2);
            }
            other => panic!("expected character expression, got {other:?}"),
        }
    }

    #[test]
    fn datetime_function_plus_interval_is_datetime_expression() {
        match expr("CURRENT_DATE + 1") {
            ValueExpression::Datetime(DatetimeValueExpression { operations, .. }) => {
                assert_eq!(operations.len(), 1);
            }
            other => panic!("expected datetime expression, got {other:?}"),
        }
    }

    #[test]
    fn count_star_set_function() {
        match expr("COUNT(*)") {
            ValueExpression::Numeric(NumericValueExpression { first, .. }) => {
                match *first.first.primary {
                    ValueExpressionPrimary::SetFunction(spec) => {
                        assert_eq!(spec.kind, SetFunctionKind::CountStar);
                        assert!(spec.argument.is_none());
                    }
                    other => panic!("expected set function, got {other:?}"),
                }
            }
            other => panic!("expected numeric expression, got {other:?}"),
        }
    }

    #[test]
    fn searched_case_expression() {
        let e = expr("CASE WHEN a > 0 THEN 'pos' ELSE 'neg' END");
        let ValueExpression::Numeric(NumericValueExpression { first, .. }) = e else {
            panic!("expected numeric expression wrapping a case");
        };
        match *first.first.primary {
            ValueExpressionPrimary::Case(case) => {
                assert!(case.operand.is_none());
                assert_eq!(case.when_clauses.len(), 1);
                assert!(case.else_result.is_some());
            }
            other => panic!("expected case expression, got {other:?}"),
        }
    }

    #[test]
    fn nested_function_calls() {
        let e = expr("SUBSTRING(UPPER(a) FROM 1 FOR 3)");
        let ValueExpression::Numeric(NumericValueExpression { first, .. }) = e else {
            panic!("expected numeric expression wrapping a string function");
        };
        assert!(matches!(
            *first.first.primary,
            ValueExpressionPrimary::StringFunction(_)
        ));
    }

    #[test]
    fn signed_numeric_factor() {
        match expr("-a") {
            ValueExpression::Numeric(NumericValueExpression { first, .. }) => {
                assert!(first.first.sign.is_some());
            }
            other => panic!("expected numeric expression, got {other:?}"),
        }
    }
}
