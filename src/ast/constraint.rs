//! Column definitions and constraints (§3, "AST — column definitions and
//! constraints"; §4.7).

use crate::ast::data_type::DataTypeDescriptor;
use crate::ast::value_expression::ValueExpression;
use crate::span::Span;

/// `<default option>`: a tag plus whatever value/precision it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultOption {
    Null,
    User,
    CurrentUser,
    SessionUser,
    SystemUser,
    CurrentDate,
    CurrentTime { precision: Option<u64> },
    CurrentTimestamp { precision: Option<u64> },
    Literal(ValueExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultDescriptor {
    pub option: DefaultOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    None,
    Full,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
}

/// `<references specification>`: the shared tail of `REFERENCES` wherever
/// it appears (column constraint or table-level `FOREIGN KEY`).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencesSpecification {
    pub referenced_table: Span,
    pub referenced_columns: Vec<Span>,
    pub match_type: MatchType,
    pub on_update: Option<ReferentialAction>,
    pub on_delete: Option<ReferentialAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintKind {
    NotNull,
    Unique,
    PrimaryKey,
    ForeignKey {
        columns: Vec<Span>,
        references: ReferencesSpecification,
    },
    Check {
        condition: Box<crate::ast::predicate::SearchCondition>,
    },
}

/// `{type, optional name, columns}`. `columns` is populated for table-level
/// `UNIQUE`/`PRIMARY KEY`/`FOREIGN KEY`; column-level constraints leave it
/// empty since the owning [`ColumnDefinition`] already names the column.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: Option<Span>,
    pub kind: ConstraintKind,
    pub columns: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: Span,
    pub data_type: DataTypeDescriptor,
    pub default: Option<DefaultDescriptor>,
    pub constraints: Vec<Constraint>,
    pub collation: Option<Span>,
}
