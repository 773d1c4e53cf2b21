use crate::ast::{InsertSource, InsertStatement, Statement};
use crate::span::Span;
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_insert_column_list(&mut self) -> PResult<Vec<Span>> {
        if !self.eat(Symbol::Lparen) {
            return Ok(Vec::new());
        }
        let mut columns = vec![self.expect_identifier()?];
        while self.eat(Symbol::Comma) {
            columns.push(self.expect_identifier()?);
        }
        self.expect(Symbol::Rparen)?;
        Ok(columns)
    }

    /// `INSERT INTO <name> ( <col list> )? ( <query expression> | DEFAULT
    /// VALUES )` (§4.8).
    pub(crate) fn parse_insert_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Insert, Symbol::Into]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let table_name = self.expect_identifier()?;
        let columns = self.parse_insert_column_list()?;
        let source = if self.has_sequence(&[Symbol::Default, Symbol::Values]) {
            self.bump();
            self.bump();
            InsertSource::DefaultValues
        } else {
            InsertSource::Query(Box::new(self.require_query_expression()?))
        };
        self.expect_statement_end()?;
        Ok(Some(Statement::Insert(InsertStatement {
            table_name,
            columns,
            source,
        })))
    }
}
