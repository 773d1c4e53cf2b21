use crate::ast::{DeleteStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `DELETE FROM <name> [WHERE <search condition>]` (§4.8).
    pub(crate) fn parse_delete_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Delete, Symbol::From]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let table_name = self.expect_identifier()?;
        let where_clause = if self.eat(Symbol::Where) {
            Some(Box::new(self.require_search_condition()?))
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(Some(Statement::Delete(DeleteStatement {
            table_name,
            where_clause,
        })))
    }
}
