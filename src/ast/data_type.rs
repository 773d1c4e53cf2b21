//! `<data type>` descriptors (§3, "AST — data types"; §4.6).

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharStringKind {
    Char,
    Varchar,
    Nchar,
    Nvarchar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStringKind {
    Bit,
    Varbit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactNumericKind {
    Int,
    Smallint,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproximateNumericKind {
    Float,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeKind {
    Date,
    Time,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// A single parsed `<data type>`. Each variant corresponds to one of the
/// data-type families the parser tries in turn (§4.6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTypeDescriptor {
    CharString {
        kind: CharStringKind,
        size: Option<u64>,
        charset: Option<Span>,
    },
    BitString {
        kind: BitStringKind,
        size: Option<u64>,
    },
    ExactNumeric {
        kind: ExactNumericKind,
        precision: Option<u64>,
        scale: Option<u64>,
    },
    ApproximateNumeric {
        kind: ApproximateNumericKind,
        precision: Option<u64>,
    },
    Datetime {
        kind: DatetimeKind,
        precision: Option<u64>,
        with_tz: bool,
    },
    Interval {
        unit: IntervalUnit,
        precision: Option<u64>,
    },
}
