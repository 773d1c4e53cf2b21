//! Abstract syntax tree: a closed, tagged-variant hierarchy rooted at
//! [`Statement`] (§3).
//!
//! Every sub-hierarchy (data types, constraints, predicates, value
//! expressions, query expressions, table references) is modeled the same
//! way: an enum for the tag, inline structs for each variant's payload, no
//! back-pointers. The tree is owned top-down; an input buffer's lifetime is
//! not threaded through these types because every leaf is a [`crate::span::Span`]
//! (an index pair), not a borrowed `&str` — the caller re-slices the
//! original buffer with [`crate::span::Span::text`] whenever it needs text.

pub mod constraint;
pub mod data_type;
pub mod predicate;
pub mod query_expression;
pub mod statement;
pub mod table_reference;
pub mod value_expression;

pub use constraint::{
    ColumnDefinition, Constraint, ConstraintKind, DefaultDescriptor, DefaultOption, MatchType,
    ReferencesSpecification, ReferentialAction,
};
pub use data_type::{
    ApproximateNumericKind, BitStringKind, CharStringKind, DataTypeDescriptor, DatetimeKind,
    ExactNumericKind, IntervalUnit,
};
pub use predicate::{
    BooleanFactor, BooleanPrimary, BooleanTerm, CompOp, Predicate, Quantifier,
    RowValueConstructor, RowValueConstructorElement, SearchCondition,
};
pub use query_expression::{
    NonJoinQueryExpression, NonJoinQueryPrimary, QueryExpression, QuerySpecification,
    SelectedColumn, TableExpression,
};
pub use statement::{
    AlterTableAction, AlterTableStatement, CheckOption, CommitStatement, CreateSchemaStatement,
    CreateTableStatement, CreateViewStatement, DeleteStatement, DropBehaviour,
    DropSchemaStatement, DropTableStatement, DropViewStatement, GrantObject, GrantObjectKind,
    GrantStatement, Grantee, InsertSource, InsertStatement, Privilege, PrivilegeSpec,
    RollbackStatement, SelectStatement, Statement, TableElement, TableScope, UpdateAssignment,
    UpdateStatement, UpdateValue,
};
pub use table_reference::{
    Correlation, Join, JoinCondition, JoinType, TableReference, TableReferencePrimary,
};
pub use value_expression::{
    AddOp, CaseExpression, CharacterValueExpression, DatetimeValueExpression,
    DatetimeValueFunction, ExtractField, IntervalTerm, IntervalValueExpression, Literal, MulOp,
    NumericFactor, NumericTerm, NumericValueExpression, NumericValueFunction, SetFunctionKind,
    SetFunctionSpecification, Sign, StringValueFunction, TrimSpec, ValueExpression,
    ValueExpressionPrimary, WhenClause, WhenCondition,
};
