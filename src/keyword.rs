//! Per-leading-letter keyword jump table.
//!
//! Mirrors the production's own performance tuning: within each leading
//! letter, entries are ordered by empirical frequency of appearance in SQL
//! statements, not alphabetically, so the common case (`SELECT`, `FROM`,
//! `WHERE`...) is found after only one or two comparisons. The tables are
//! `const` arrays baked in at compile time — there is no lazily-initialized
//! global state to race on first use.

use crate::symbol::Symbol;

type Entry = (Symbol, &'static str);

const A: &[Entry] = &[
    (Symbol::And, "AND"),
    (Symbol::As, "AS"),
    (Symbol::Avg, "AVG"),
    (Symbol::Alter, "ALTER"),
    (Symbol::All, "ALL"),
    (Symbol::Any, "ANY"),
    (Symbol::Action, "ACTION"),
    (Symbol::At, "AT"),
    (Symbol::Add, "ADD"),
    (Symbol::Authorization, "AUTHORIZATION"),
];

const B: &[Entry] = &[
    (Symbol::Between, "BETWEEN"),
    (Symbol::By, "BY"),
    (Symbol::Bit, "BIT"),
    (Symbol::BitLength, "BIT_LENGTH"),
    (Symbol::Both, "BOTH"),
];

const C: &[Entry] = &[
    (Symbol::Count, "COUNT"),
    (Symbol::Commit, "COMMIT"),
    (Symbol::Create, "CREATE"),
    (Symbol::CurrentDate, "CURRENT_DATE"),
    (Symbol::CurrentTime, "CURRENT_TIME"),
    (Symbol::CurrentTimestamp, "CURRENT_TIMESTAMP"),
    (Symbol::CurrentUser, "CURRENT_USER"),
    (Symbol::Coalesce, "COALESCE"),
    (Symbol::Case, "CASE"),
    (Symbol::Cross, "CROSS"),
    (Symbol::Convert, "CONVERT"),
    (Symbol::CharLength, "CHAR_LENGTH"),
    (Symbol::CharacterLength, "CHARACTER_LENGTH"),
    (Symbol::Char, "CHAR"),
    (Symbol::Character, "CHARACTER"),
    (Symbol::Cascade, "CASCADE"),
    (Symbol::Check, "CHECK"),
    (Symbol::Column, "COLUMN"),
    (Symbol::Collate, "COLLATE"),
    (Symbol::Collation, "COLLATION"),
    (Symbol::Constraint, "CONSTRAINT"),
    (Symbol::Cascaded, "CASCADED"),
];

const D: &[Entry] = &[
    (Symbol::Delete, "DELETE"),
    (Symbol::Distinct, "DISTINCT"),
    (Symbol::Date, "DATE"),
    (Symbol::Day, "DAY"),
    (Symbol::Dec, "DEC"),
    (Symbol::Decimal, "DECIMAL"),
    (Symbol::Default, "DEFAULT"),
    (Symbol::Drop, "DROP"),
    (Symbol::Double, "DOUBLE"),
    (Symbol::Domain, "DOMAIN"),
];

const E: &[Entry] = &[
    (Symbol::Exists, "EXISTS"),
    (Symbol::End, "END"),
    (Symbol::Else, "ELSE"),
    (Symbol::Extract, "EXTRACT"),
    (Symbol::Escape, "ESCAPE"),
];

const F: &[Entry] = &[
    (Symbol::From, "FROM"),
    (Symbol::For, "FOR"),
    (Symbol::Float, "FLOAT"),
    (Symbol::Full, "FULL"),
    (Symbol::Foreign, "FOREIGN"),
];

const G: &[Entry] = &[
    (Symbol::Group, "GROUP"),
    (Symbol::Global, "GLOBAL"),
    (Symbol::Grant, "GRANT"),
];

const H: &[Entry] = &[(Symbol::Having, "HAVING"), (Symbol::Hour, "HOUR")];

const I: &[Entry] = &[
    (Symbol::In, "IN"),
    (Symbol::Insert, "INSERT"),
    (Symbol::Into, "INTO"),
    (Symbol::Is, "IS"),
    (Symbol::Inner, "INNER"),
    (Symbol::Interval, "INTERVAL"),
    (Symbol::Int, "INT"),
    (Symbol::Integer, "INTEGER"),
];

const J: &[Entry] = &[(Symbol::Join, "JOIN")];
const K: &[Entry] = &[(Symbol::Key, "KEY")];

const L: &[Entry] = &[
    (Symbol::Like, "LIKE"),
    (Symbol::Left, "LEFT"),
    (Symbol::Lower, "LOWER"),
    (Symbol::Local, "LOCAL"),
    (Symbol::Leading, "LEADING"),
];

const M: &[Entry] = &[
    (Symbol::Max, "MAX"),
    (Symbol::Min, "MIN"),
    (Symbol::Match, "MATCH"),
    (Symbol::Minute, "MINUTE"),
    (Symbol::Month, "MONTH"),
];

const N: &[Entry] = &[
    (Symbol::Not, "NOT"),
    (Symbol::No, "NO"),
    (Symbol::Null, "NULL"),
    (Symbol::Nullif, "NULLIF"),
    (Symbol::Natural, "NATURAL"),
    (Symbol::National, "NATIONAL"),
    (Symbol::Nchar, "NCHAR"),
    (Symbol::Numeric, "NUMERIC"),
];

const O: &[Entry] = &[
    (Symbol::Or, "OR"),
    (Symbol::On, "ON"),
    (Symbol::Outer, "OUTER"),
    (Symbol::OctetLength, "OCTET_LENGTH"),
    (Symbol::Option, "OPTION"),
    (Symbol::Overlaps, "OVERLAPS"),
];

const P: &[Entry] = &[
    (Symbol::Position, "POSITION"),
    (Symbol::Precision, "PRECISION"),
    (Symbol::Primary, "PRIMARY"),
    (Symbol::Partial, "PARTIAL"),
    (Symbol::Privileges, "PRIVILEGES"),
    (Symbol::Public, "PUBLIC"),
];

const R: &[Entry] = &[
    (Symbol::Rollback, "ROLLBACK"),
    (Symbol::Right, "RIGHT"),
    (Symbol::Real, "REAL"),
    (Symbol::References, "REFERENCES"),
    (Symbol::Restrict, "RESTRICT"),
];

const S: &[Entry] = &[
    (Symbol::Select, "SELECT"),
    (Symbol::Set, "SET"),
    (Symbol::Sum, "SUM"),
    (Symbol::Schema, "SCHEMA"),
    (Symbol::Second, "SECOND"),
    (Symbol::Substring, "SUBSTRING"),
    (Symbol::Smallint, "SMALLINT"),
    (Symbol::SessionUser, "SESSION_USER"),
    (Symbol::SystemUser, "SYSTEM_USER"),
    (Symbol::Some, "SOME"),
];

const T: &[Entry] = &[
    (Symbol::Table, "TABLE"),
    (Symbol::Time, "TIME"),
    (Symbol::Timestamp, "TIMESTAMP"),
    (Symbol::Temporary, "TEMPORARY"),
    (Symbol::Trim, "TRIM"),
    (Symbol::Then, "THEN"),
    (Symbol::To, "TO"),
    (Symbol::Trailing, "TRAILING"),
    (Symbol::Translate, "TRANSLATE"),
    (Symbol::Translation, "TRANSLATION"),
];

const U: &[Entry] = &[
    (Symbol::Update, "UPDATE"),
    (Symbol::Upper, "UPPER"),
    (Symbol::Using, "USING"),
    (Symbol::Union, "UNION"),
    (Symbol::User, "USER"),
    (Symbol::Unique, "UNIQUE"),
    (Symbol::Usage, "USAGE"),
];

const V: &[Entry] = &[
    (Symbol::Values, "VALUES"),
    (Symbol::Varchar, "VARCHAR"),
    (Symbol::Varying, "VARYING"),
    (Symbol::View, "VIEW"),
    (Symbol::Value, "VALUE"),
];

const W: &[Entry] = &[
    (Symbol::Where, "WHERE"),
    (Symbol::With, "WITH"),
    (Symbol::When, "WHEN"),
    (Symbol::Work, "WORK"),
];

const Y: &[Entry] = &[(Symbol::Year, "YEAR")];
const Z: &[Entry] = &[(Symbol::Zone, "ZONE")];

/// Returns the jump table for a (case-insensitive) leading letter, or `None`
/// if no keyword starts with that letter (`q`, `x`, and non-letters).
fn jump_table(lead: u8) -> Option<&'static [Entry]> {
    match lead.to_ascii_lowercase() {
        b'a' => Some(A),
        b'b' => Some(B),
        b'c' => Some(C),
        b'd' => Some(D),
        b'e' => Some(E),
        b'f' => Some(F),
        b'g' => Some(G),
        b'h' => Some(H),
        b'i' => Some(I),
        b'j' => Some(J),
        b'k' => Some(K),
        b'l' => Some(L),
        b'm' => Some(M),
        b'n' => Some(N),
        b'o' => Some(O),
        b'p' => Some(P),
        b'r' => Some(R),
        b's' => Some(S),
        b't' => Some(T),
        b'u' => Some(U),
        b'v' => Some(V),
        b'w' => Some(W),
        b'y' => Some(Y),
        b'z' => Some(Z),
        _ => None,
    }
}

/// Looks up `run` (a maximal `[A-Za-z0-9_]` identifier run already scanned
/// by the lexer) against the jump table for its leading byte.
///
/// Matching requires full-length, case-insensitive equality: no partial or
/// prefix matches, so `CHARACTERS` never matches `CHARACTER`.
#[must_use]
pub fn lookup(run: &str) -> Option<Symbol> {
    let lead = *run.as_bytes().first()?;
    let table = jump_table(lead)?;
    table
        .iter()
        .find(|(_, spelling)| spelling.len() == run.len() && spelling.eq_ignore_ascii_case(run))
        .map(|(sym, _)| *sym)
}
