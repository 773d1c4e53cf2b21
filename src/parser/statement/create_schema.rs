use crate::ast::{CreateSchemaStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `CREATE SCHEMA [<name>] [AUTHORIZATION <id>] [DEFAULT CHARACTER SET
    /// <id>]`; schema name and authorization identifier are mutually
    /// optional but at least one must appear (§4.8).
    pub(crate) fn parse_create_schema_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Create, Symbol::Schema]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let schema_name = if self.at(Symbol::Identifier) {
            Some(self.bump().span)
        } else {
            None
        };
        let authorization_identifier = if self.eat(Symbol::Authorization) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        if schema_name.is_none() && authorization_identifier.is_none() {
            return Err(self.error_expected("a schema name or AUTHORIZATION clause"));
        }
        let default_charset = if self.has_sequence(&[Symbol::Default, Symbol::Character, Symbol::Set])
        {
            self.bump();
            self.bump();
            self.bump();
            Some(self.expect_identifier()?)
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(Some(Statement::CreateSchema(CreateSchemaStatement {
            schema_name,
            authorization_identifier,
            default_charset,
        })))
    }
}
