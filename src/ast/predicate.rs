//! Predicates and search conditions (§3, "AST — predicates and search
//! conditions"; §4.9).

use crate::ast::query_expression::QueryExpression;
use crate::ast::value_expression::ValueExpression;

/// A value, a row, or a subquery-yielded row used as a predicate operand
/// or `INSERT ... VALUES` element.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValueConstructorElement {
    ValueExpression(Box<ValueExpression>),
    Null,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowValueConstructor {
    Element(RowValueConstructorElement),
    /// A parenthesized, comma-delimited list: `(a, b, c)`.
    List(Vec<RowValueConstructorElement>),
    Subquery(Box<QueryExpression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Any,
    Some,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Comparison {
        op: CompOp,
        left: RowValueConstructor,
        right: RowValueConstructor,
    },
    Between {
        operand: RowValueConstructor,
        low: RowValueConstructor,
        high: RowValueConstructor,
    },
    InValues {
        operand: RowValueConstructor,
        values: Vec<RowValueConstructor>,
    },
    InSubquery {
        operand: RowValueConstructor,
        subquery: Box<QueryExpression>,
    },
    Like {
        operand: Box<ValueExpression>,
        pattern: Box<ValueExpression>,
        escape: Option<Box<ValueExpression>>,
    },
    Null {
        operand: RowValueConstructor,
    },
    QuantifiedComparison {
        op: CompOp,
        left: RowValueConstructor,
        quantifier: Quantifier,
        subquery: Box<QueryExpression>,
    },
    Exists {
        subquery: Box<QueryExpression>,
    },
    Unique {
        subquery: Box<QueryExpression>,
    },
    Match {
        operand: RowValueConstructor,
        unique: bool,
        subquery: Box<QueryExpression>,
    },
    Overlaps {
        left: RowValueConstructor,
        right: RowValueConstructor,
    },
}

/// `{reverse_op (NOT), primary}`. `reverse_op` is carried on the wrapping
/// factor rather than duplicated into every `Predicate` variant, matching
/// the "shared fields live on the enclosing wrapper" guidance (§9).
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanPrimary {
    Predicate(Predicate),
    Parenthesized(Box<SearchCondition>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanFactor {
    pub reverse_op: bool,
    pub primary: BooleanPrimary,
}

/// An AND-chain of boolean factors. A single factor with no AND operand is
/// still represented as a one-element `factors` vector (§3 invariants:
/// "Printers collapse trivial wrappers, but the tree preserves them").
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanTerm {
    pub factors: Vec<BooleanFactor>,
}

/// An OR-list of boolean terms, left-to-right evaluation order (§3
/// invariants).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCondition {
    pub terms: Vec<BooleanTerm>,
}
