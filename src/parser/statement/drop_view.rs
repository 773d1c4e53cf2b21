use crate::ast::{DropViewStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `DROP VIEW <name> [CASCADE|RESTRICT]` (§4.8).
    pub(crate) fn parse_drop_view_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Drop, Symbol::View]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let view_name = self.expect_identifier()?;
        let behaviour = self.parse_drop_behaviour();
        self.expect_statement_end()?;
        Ok(Some(Statement::DropView(DropViewStatement {
            view_name,
            behaviour,
        })))
    }
}
