//! Column definitions, column/table constraints, and `<references
//! specification>` (§4.7).

use crate::ast::{
    ColumnDefinition, Constraint, ConstraintKind, DefaultDescriptor, DefaultOption, MatchType,
    ReferencesSpecification, ReferentialAction,
};
use crate::span::Span;
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_default_option(&mut self) -> PResult<DefaultOption> {
        match self.symbol() {
            Symbol::Null => {
                self.bump();
                Ok(DefaultOption::Null)
            }
            Symbol::User => {
                self.bump();
                Ok(DefaultOption::User)
            }
            Symbol::CurrentUser => {
                self.bump();
                Ok(DefaultOption::CurrentUser)
            }
            Symbol::SessionUser => {
                self.bump();
                Ok(DefaultOption::SessionUser)
            }
            Symbol::SystemUser => {
                self.bump();
                Ok(DefaultOption::SystemUser)
            }
            Symbol::CurrentDate => {
                self.bump();
                Ok(DefaultOption::CurrentDate)
            }
            Symbol::CurrentTime => {
                self.bump();
                let precision = self.parse_optional_parenthesized_precision()?;
                Ok(DefaultOption::CurrentTime { precision })
            }
            Symbol::CurrentTimestamp => {
                self.bump();
                let precision = self.parse_optional_parenthesized_precision()?;
                Ok(DefaultOption::CurrentTimestamp { precision })
            }
            _ => Ok(DefaultOption::Literal(self.require_value_expression()?)),
        }
    }

    /// `DEFAULT <default option>`, if present.
    fn parse_default_clause(&mut self) -> PResult<Option<DefaultDescriptor>> {
        if !self.eat(Symbol::Default) {
            return Ok(None);
        }
        let option = self.parse_default_option()?;
        Ok(Some(DefaultDescriptor { option }))
    }

    pub(crate) fn require_default_clause(&mut self) -> PResult<DefaultDescriptor> {
        self.parse_default_clause()?
            .ok_or_else(|| self.error_expected("DEFAULT"))
    }

    /// `REFERENCES <table> [(cols)] [MATCH ...] [ON {UPDATE|DELETE} ...]`,
    /// with `ON UPDATE`/`ON DELETE` each allowed at most once (§4.7: a
    /// duplicate is a syntax error, not a silent override).
    fn parse_references_specification(&mut self) -> PResult<ReferencesSpecification> {
        self.expect(Symbol::References)?;
        let referenced_table = self.expect_identifier()?;
        let mut referenced_columns = Vec::new();
        if self.eat(Symbol::Lparen) {
            referenced_columns.push(self.expect_identifier()?);
            while self.eat(Symbol::Comma) {
                referenced_columns.push(self.expect_identifier()?);
            }
            self.expect(Symbol::Rparen)?;
        }
        let match_type = if self.eat(Symbol::Match) {
            match self.symbol() {
                Symbol::Full => {
                    self.bump();
                    MatchType::Full
                }
                Symbol::Partial => {
                    self.bump();
                    MatchType::Partial
                }
                _ => return Err(self.error_expected("FULL or PARTIAL")),
            }
        } else {
            MatchType::None
        };
        let mut on_update = None;
        let mut on_delete = None;
        while self.eat(Symbol::On) {
            if self.eat(Symbol::Update) {
                if on_update.is_some() {
                    return Err(self.error("ON UPDATE specified more than once"));
                }
                on_update = Some(self.parse_referential_action()?);
            } else if self.eat(Symbol::Delete) {
                if on_delete.is_some() {
                    return Err(self.error("ON DELETE specified more than once"));
                }
                on_delete = Some(self.parse_referential_action()?);
            } else {
                return Err(self.error_expected("UPDATE or DELETE"));
            }
        }
        Ok(ReferencesSpecification {
            referenced_table,
            referenced_columns,
            match_type,
            on_update,
            on_delete,
        })
    }

    fn parse_referential_action(&mut self) -> PResult<ReferentialAction> {
        match self.symbol() {
            Symbol::Cascade => {
                self.bump();
                Ok(ReferentialAction::Cascade)
            }
            Symbol::Set => {
                self.bump();
                if self.eat(Symbol::Null) {
                    Ok(ReferentialAction::SetNull)
                } else if self.eat(Symbol::Default) {
                    Ok(ReferentialAction::SetDefault)
                } else {
                    Err(self.error_expected("NULL or DEFAULT"))
                }
            }
            Symbol::No => {
                self.bump();
                self.expect(Symbol::Action)?;
                Ok(ReferentialAction::NoAction)
            }
            _ => Err(self.error_expected("CASCADE, SET NULL, SET DEFAULT, or NO ACTION")),
        }
    }

    /// `CHECK ( <search condition> )` (§4.7: fully parsed, not rejected).
    fn parse_check_constraint_kind(&mut self) -> PResult<Option<ConstraintKind>> {
        if !self.eat(Symbol::Check) {
            return Ok(None);
        }
        self.expect(Symbol::Lparen)?;
        let condition = Box::new(self.require_search_condition()?);
        self.expect(Symbol::Rparen)?;
        Ok(Some(ConstraintKind::Check { condition }))
    }

    /// A single column constraint (no enclosing column list: the column is
    /// implied by the owning [`ColumnDefinition`]).
    fn parse_column_constraint_kind(&mut self) -> PResult<Option<ConstraintKind>> {
        if let Some(kind) = self.parse_check_constraint_kind()? {
            return Ok(Some(kind));
        }
        match self.symbol() {
            Symbol::Not => {
                self.bump();
                self.expect(Symbol::Null)?;
                Ok(Some(ConstraintKind::NotNull))
            }
            Symbol::Unique => {
                self.bump();
                Ok(Some(ConstraintKind::Unique))
            }
            Symbol::Primary => {
                self.bump();
                self.expect(Symbol::Key)?;
                Ok(Some(ConstraintKind::PrimaryKey))
            }
            Symbol::References => {
                let references = self.parse_references_specification()?;
                Ok(Some(ConstraintKind::ForeignKey {
                    columns: Vec::new(),
                    references,
                }))
            }
            _ => Ok(None),
        }
    }

    fn parse_constraint_name(&mut self) -> PResult<Option<Span>> {
        if !self.eat(Symbol::Constraint) {
            return Ok(None);
        }
        Ok(Some(self.expect_identifier()?))
    }

    /// A column-level `[CONSTRAINT name] <kind>`, repeated for as many
    /// constraints as the column definition carries.
    fn parse_column_constraints(&mut self) -> PResult<Vec<Constraint>> {
        let mut constraints = Vec::new();
        loop {
            let cp = self.checkpoint();
            let name = self.parse_constraint_name()?;
            match self.parse_column_constraint_kind()? {
                Some(kind) => constraints.push(Constraint {
                    name,
                    kind,
                    columns: Vec::new(),
                }),
                None => {
                    self.restore(cp);
                    break;
                }
            }
        }
        Ok(constraints)
    }

    /// `<column definition>`: `<name> <data type> [DEFAULT ...]
    /// [constraints...] [COLLATE <id>]` (§4.7).
    pub(crate) fn parse_column_definition(&mut self) -> PResult<Option<ColumnDefinition>> {
        if !self.at(Symbol::Identifier) {
            return Ok(None);
        }
        let name = self.bump().span;
        let data_type = self
            .parse_data_type()?
            .ok_or_else(|| self.error_expected("a data type"))?;
        let default = self.parse_default_clause()?;
        let constraints = self.parse_column_constraints()?;
        let collation = if self.eat(Symbol::Collate) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(Some(ColumnDefinition {
            name,
            data_type,
            default,
            constraints,
            collation,
        }))
    }

    fn parse_column_list(&mut self) -> PResult<Vec<Span>> {
        self.expect(Symbol::Lparen)?;
        let mut columns = vec![self.expect_identifier()?];
        while self.eat(Symbol::Comma) {
            columns.push(self.expect_identifier()?);
        }
        self.expect(Symbol::Rparen)?;
        Ok(columns)
    }

    /// A table-level constraint: `[CONSTRAINT name] {UNIQUE|PRIMARY
    /// KEY|FOREIGN KEY} (cols) ...` or a table-level `CHECK (...)` (§4.7).
    pub(crate) fn parse_table_constraint(&mut self) -> PResult<Option<Constraint>> {
        let name = self.parse_constraint_name()?;
        let kind = match self.symbol() {
            Symbol::Unique => {
                self.bump();
                let columns = self.parse_column_list()?;
                return Ok(Some(Constraint {
                    name,
                    kind: ConstraintKind::Unique,
                    columns,
                }));
            }
            Symbol::Primary => {
                self.bump();
                self.expect(Symbol::Key)?;
                let columns = self.parse_column_list()?;
                return Ok(Some(Constraint {
                    name,
                    kind: ConstraintKind::PrimaryKey,
                    columns,
                }));
            }
            Symbol::Foreign => {
                self.bump();
                self.expect(Symbol::Key)?;
                let columns = self.parse_column_list()?;
                let references = self.parse_references_specification()?;
                return Ok(Some(Constraint {
                    name,
                    kind: ConstraintKind::ForeignKey {
                        columns: Vec::new(),
                        references,
                    },
                    columns,
                }));
            }
            _ => self.parse_check_constraint_kind()?,
        };
        match kind {
            Some(kind) => Ok(Some(Constraint {
                name,
                kind,
                columns: Vec::new(),
            })),
            None => {
                if name.is_some() {
                    Err(self.error_expected(
                        "UNIQUE, PRIMARY KEY, FOREIGN KEY, or CHECK",
                    ))
                } else {
                    Ok(None)
                }
            }
        }
    }
}
