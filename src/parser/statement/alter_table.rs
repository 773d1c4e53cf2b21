use crate::ast::{AlterTableAction, AlterTableStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `ADD [COLUMN] <column def>` or `ADD <table constraint>` (§4.8).
    fn parse_add_action(&mut self) -> PResult<AlterTableAction> {
        self.eat(Symbol::Column);
        if let Some(constraint) = self.parse_table_constraint()? {
            return Ok(AlterTableAction::AddConstraint(constraint));
        }
        let column = self
            .parse_column_definition()?
            .ok_or_else(|| self.error_expected("a column definition or table constraint"))?;
        Ok(AlterTableAction::AddColumn(column))
    }

    /// `DROP [COLUMN] <name> [CASCADE|RESTRICT]` or `DROP CONSTRAINT <name>
    /// [CASCADE|RESTRICT]` (§4.8).
    fn parse_drop_action(&mut self) -> PResult<AlterTableAction> {
        if self.eat(Symbol::Constraint) {
            let name = self.expect_identifier()?;
            let behaviour = self.parse_drop_behaviour();
            return Ok(AlterTableAction::DropConstraint { name, behaviour });
        }
        self.eat(Symbol::Column);
        let name = self.expect_identifier()?;
        let behaviour = self.parse_drop_behaviour();
        Ok(AlterTableAction::DropColumn { name, behaviour })
    }

    /// `ALTER [COLUMN] <name> SET <default>` or `ALTER [COLUMN] <name> DROP
    /// DEFAULT` (§4.8).
    fn parse_alter_column_action(&mut self) -> PResult<AlterTableAction> {
        self.eat(Symbol::Column);
        let name = self.expect_identifier()?;
        if self.eat(Symbol::Set) {
            let default = self.require_default_clause()?;
            return Ok(AlterTableAction::AlterColumnSetDefault { name, default });
        }
        self.expect(Symbol::Drop)?;
        self.expect(Symbol::Default)?;
        Ok(AlterTableAction::AlterColumnDropDefault { name })
    }

    /// `ALTER TABLE <name> <action>` (§4.8).
    pub(crate) fn parse_alter_table_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Alter, Symbol::Table]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let table_name = self.expect_identifier()?;
        let action = match self.symbol() {
            Symbol::Add => {
                self.bump();
                self.parse_add_action()?
            }
            Symbol::Drop => {
                self.bump();
                self.parse_drop_action()?
            }
            Symbol::Alter => {
                self.bump();
                self.parse_alter_column_action()?
            }
            _ => return Err(self.error_expected("ADD, DROP, or ALTER")),
        };
        self.expect_statement_end()?;
        Ok(Some(Statement::AlterTable(AlterTableStatement {
            table_name,
            action,
        })))
    }
}
