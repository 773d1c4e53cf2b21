//! Top-level statement variants (§3, "AST — statements"; §4.8).

use crate::ast::constraint::{ColumnDefinition, Constraint, DefaultDescriptor};
use crate::ast::predicate::SearchCondition;
use crate::ast::query_expression::QueryExpression;
use crate::ast::value_expression::ValueExpression;
use crate::span::Span;

/// `CASCADE|RESTRICT`, defaulting to `CASCADE` (§8 boundary behaviors:
/// `DROP TABLE u;` with no behaviour keyword gets `CASCADE`, not the
/// standard SQL-92 default of `RESTRICT` — this rewrite follows the spec's
/// documented boundary behavior, not the ISO text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropBehaviour {
    #[default]
    Cascade,
    Restrict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchemaStatement {
    pub schema_name: Option<Span>,
    pub authorization_identifier: Option<Span>,
    pub default_charset: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropSchemaStatement {
    pub schema_name: Span,
    pub behaviour: DropBehaviour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableScope {
    Global,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableElement {
    Column(ColumnDefinition),
    Constraint(Constraint),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub temporary_scope: Option<TableScope>,
    pub table_name: Span,
    pub elements: Vec<TableElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStatement {
    pub table_name: Span,
    pub behaviour: DropBehaviour,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    AddColumn(ColumnDefinition),
    AddConstraint(Constraint),
    DropColumn {
        name: Span,
        behaviour: DropBehaviour,
    },
    DropConstraint {
        name: Span,
        behaviour: DropBehaviour,
    },
    AlterColumnSetDefault {
        name: Span,
        default: DefaultDescriptor,
    },
    AlterColumnDropDefault {
        name: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStatement {
    pub table_name: Span,
    pub action: AlterTableAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOption {
    Cascaded,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateViewStatement {
    pub view_name: Span,
    pub columns: Vec<Span>,
    pub query: Box<QueryExpression>,
    pub check_option: Option<CheckOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropViewStatement {
    pub view_name: Span,
    pub behaviour: DropBehaviour,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub specification: crate::ast::query_expression::QuerySpecification,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    Query(Box<QueryExpression>),
    DefaultValues,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table_name: Span,
    pub columns: Vec<Span>,
    pub source: InsertSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table_name: Span,
    pub where_clause: Option<Box<SearchCondition>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateValue {
    Value(Box<ValueExpression>),
    Null,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAssignment {
    pub column: Span,
    pub value: UpdateValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table_name: Span,
    pub assignments: Vec<UpdateAssignment>,
    pub where_clause: Option<Box<SearchCondition>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitStatement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollbackStatement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Select,
    Insert,
    Delete,
    Usage,
    /// `ALL PRIVILEGES`.
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrivilegeSpec {
    Simple(Privilege),
    /// `UPDATE [(columns)]` and `REFERENCES [(columns)]` optionally narrow
    /// the privilege to specific columns.
    Update(Vec<Span>),
    References(Vec<Span>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantObjectKind {
    Table,
    Domain,
    Collation,
    CharacterSet,
    Translation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrantObject {
    pub kind: GrantObjectKind,
    pub name: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Grantee {
    Public,
    Identifier(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrantStatement {
    pub privileges: Vec<PrivilegeSpec>,
    pub object: GrantObject,
    pub grantees: Vec<Grantee>,
    pub with_grant_option: bool,
}

/// The closed set of recognized statements (§3). Every variant carries its
/// own statement-specific payload struct; there is no shared base fields
/// beyond what each payload declares for itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateSchema(CreateSchemaStatement),
    DropSchema(DropSchemaStatement),
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    AlterTable(AlterTableStatement),
    CreateView(CreateViewStatement),
    DropView(DropViewStatement),
    Select(SelectStatement),
    Insert(InsertStatement),
    Delete(DeleteStatement),
    Update(UpdateStatement),
    Commit(CommitStatement),
    Rollback(RollbackStatement),
    Grant(GrantStatement),
}
