use crate::ast::{CommitStatement, RollbackStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `COMMIT [WORK]` (§4.8).
    pub(crate) fn parse_commit_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.eat(Symbol::Commit) {
            return Ok(None);
        }
        self.eat(Symbol::Work);
        self.expect_statement_end()?;
        Ok(Some(Statement::Commit(CommitStatement)))
    }

    /// `ROLLBACK [WORK]` (§4.8).
    pub(crate) fn parse_rollback_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.eat(Symbol::Rollback) {
            return Ok(None);
        }
        self.eat(Symbol::Work);
        self.expect_statement_end()?;
        Ok(Some(Statement::Rollback(RollbackStatement)))
    }
}
