use crate::ast::{DropTableStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `DROP TABLE <name> [CASCADE|RESTRICT]` (§4.8).
    pub(crate) fn parse_drop_table_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Drop, Symbol::Table]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let table_name = self.expect_identifier()?;
        let behaviour = self.parse_drop_behaviour();
        self.expect_statement_end()?;
        Ok(Some(Statement::DropTable(DropTableStatement {
            table_name,
            behaviour,
        })))
    }
}
