use crate::ast::{CreateTableStatement, Statement, TableElement, TableScope};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_table_scope(&mut self) -> Option<TableScope> {
        let scope = match self.symbol() {
            Symbol::Global => TableScope::Global,
            Symbol::Local => TableScope::Local,
            _ => return None,
        };
        self.bump();
        Some(scope)
    }

    fn parse_table_element(&mut self) -> PResult<Option<TableElement>> {
        if let Some(constraint) = self.parse_table_constraint()? {
            return Ok(Some(TableElement::Constraint(constraint)));
        }
        Ok(self
            .parse_column_definition()?
            .map(TableElement::Column))
    }

    /// `CREATE [{GLOBAL|LOCAL} TEMPORARY] TABLE <name> ( <table element>,
    /// … )` (§4.8).
    pub(crate) fn parse_create_table_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.at(Symbol::Create) {
            return Ok(None);
        }
        let cp = self.checkpoint();
        self.bump();
        let temporary_scope = self.parse_table_scope();
        if temporary_scope.is_some() && !self.eat(Symbol::Temporary) {
            return Err(self.error_expected("TEMPORARY"));
        }
        if !self.eat(Symbol::Table) {
            self.restore(cp);
            return Ok(None);
        }
        let table_name = self.expect_identifier()?;
        self.expect(Symbol::Lparen)?;
        let mut elements = vec![self.require_table_element()?];
        while self.eat(Symbol::Comma) {
            elements.push(self.require_table_element()?);
        }
        self.expect(Symbol::Rparen)?;
        self.expect_statement_end()?;
        Ok(Some(Statement::CreateTable(CreateTableStatement {
            temporary_scope,
            table_name,
            elements,
        })))
    }

    fn require_table_element(&mut self) -> PResult<TableElement> {
        self.parse_table_element()?
            .ok_or_else(|| self.error_expected("a column definition or table constraint"))
    }
}
