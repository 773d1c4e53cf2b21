//! The closed set of terminal and meta-symbols the lexer can emit.
//!
//! A [`Symbol`] is the *meaning* of a lexeme, as distinct from its raw text.
//! Two different spellings (`create`, `CREATE`) tokenize to the same
//! `Symbol::Create`; the original casing is recoverable from the token's
//! [`crate::span::Span`] if a caller needs it.

/// A terminal (or meta-) symbol produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Symbol {
    /// Emitted once, before the first real token, and never seen by parser
    /// productions directly (the first call to `next()` already advances
    /// past it).
    Sos,
    /// End of input. Sticky: once reached, every subsequent `next()`/`peek()`
    /// keeps returning it.
    Eos,
    /// A lexical failure (unterminated comment, unterminated delimited
    /// identifier). The offending position is on the token's span.
    Error,

    // Punctuators
    Asterisk,
    Colon,
    Concatenation,
    Comma,
    Equal,
    Exclamation,
    GreaterThan,
    LessThan,
    Lparen,
    Minus,
    NotEqual,
    Plus,
    QuestionMark,
    Rparen,
    Semicolon,
    Solidus,
    VerticalBar,

    // Reserved keywords
    Action,
    Add,
    All,
    Alter,
    And,
    Any,
    As,
    At,
    Authorization,
    Avg,
    Between,
    Bit,
    BitLength,
    Both,
    By,
    Cascade,
    Cascaded,
    Case,
    Char,
    Character,
    CharLength,
    CharacterLength,
    Check,
    Coalesce,
    Collate,
    Collation,
    Column,
    Commit,
    Constraint,
    Convert,
    Count,
    Create,
    Cross,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Date,
    Day,
    Dec,
    Decimal,
    Default,
    Delete,
    Distinct,
    Domain,
    Double,
    Drop,
    Else,
    End,
    Escape,
    Exists,
    Extract,
    Float,
    For,
    Foreign,
    From,
    Full,
    Global,
    Grant,
    Group,
    Having,
    Hour,
    In,
    Inner,
    Insert,
    Int,
    Into,
    Integer,
    Interval,
    Is,
    Join,
    Key,
    Leading,
    Left,
    Local,
    Lower,
    Like,
    Match,
    Max,
    Min,
    Minute,
    Month,
    National,
    Natural,
    Nchar,
    No,
    Not,
    Numeric,
    Null,
    Nullif,
    OctetLength,
    On,
    Option,
    Or,
    Overlaps,
    Outer,
    Partial,
    Position,
    Precision,
    Primary,
    Privileges,
    Public,
    Real,
    References,
    Restrict,
    Right,
    Rollback,
    Schema,
    Second,
    Select,
    Set,
    Smallint,
    SessionUser,
    Some,
    Substring,
    Sum,
    SystemUser,
    Table,
    Temporary,
    Then,
    Time,
    Timestamp,
    To,
    Trailing,
    Translate,
    Translation,
    Trim,
    Union,
    Unique,
    Update,
    Upper,
    Usage,
    User,
    Using,
    Value,
    Values,
    Varchar,
    Varying,
    View,
    When,
    Where,
    With,
    Work,
    Year,
    Zone,

    // Other symbols
    Identifier,
    Comment,

    // Literals
    LiteralApproximateNumber,
    LiteralBitString,
    LiteralCharacterString,
    LiteralHexString,
    LiteralNationalCharacterString,
    LiteralSignedDecimal,
    LiteralSignedInteger,
    LiteralUnsignedDecimal,
    LiteralUnsignedInteger,
}

impl Symbol {
    /// True if `self` is one of the literal-flavor symbols.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::LiteralApproximateNumber
                | Self::LiteralBitString
                | Self::LiteralCharacterString
                | Self::LiteralHexString
                | Self::LiteralNationalCharacterString
                | Self::LiteralSignedDecimal
                | Self::LiteralSignedInteger
                | Self::LiteralUnsignedDecimal
                | Self::LiteralUnsignedInteger
        )
    }

    /// True if `self` is a reserved keyword (i.e. appears in a jump table
    /// entry in [`crate::keyword`]).
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        !matches!(
            self,
            Self::Sos
                | Self::Eos
                | Self::Error
                | Self::Asterisk
                | Self::Colon
                | Self::Concatenation
                | Self::Comma
                | Self::Equal
                | Self::Exclamation
                | Self::GreaterThan
                | Self::LessThan
                | Self::Lparen
                | Self::Minus
                | Self::NotEqual
                | Self::Plus
                | Self::QuestionMark
                | Self::Rparen
                | Self::Semicolon
                | Self::Solidus
                | Self::VerticalBar
                | Self::Identifier
                | Self::Comment
        ) && !self.is_literal()
    }

    /// A stable printable spelling, used when rendering "expected X but
    /// found Y" error messages. Keywords render in upper case; punctuators
    /// render as their source character(s).
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Sos => "<start of input>",
            Self::Eos => "<end of input>",
            Self::Error => "<error>",
            Self::Asterisk => "*",
            Self::Colon => ":",
            Self::Concatenation => "||",
            Self::Comma => ",",
            Self::Equal => "=",
            Self::Exclamation => "!",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Lparen => "(",
            Self::Minus => "-",
            Self::NotEqual => "<>",
            Self::Plus => "+",
            Self::QuestionMark => "?",
            Self::Rparen => ")",
            Self::Semicolon => ";",
            Self::Solidus => "/",
            Self::VerticalBar => "|",
            Self::Action => "ACTION",
            Self::Add => "ADD",
            Self::All => "ALL",
            Self::Alter => "ALTER",
            Self::And => "AND",
            Self::Any => "ANY",
            Self::As => "AS",
            Self::At => "AT",
            Self::Authorization => "AUTHORIZATION",
            Self::Avg => "AVG",
            Self::Between => "BETWEEN",
            Self::Bit => "BIT",
            Self::BitLength => "BIT_LENGTH",
            Self::Both => "BOTH",
            Self::By => "BY",
            Self::Cascade => "CASCADE",
            Self::Cascaded => "CASCADED",
            Self::Case => "CASE",
            Self::Char => "CHAR",
            Self::Character => "CHARACTER",
            Self::CharLength => "CHAR_LENGTH",
            Self::CharacterLength => "CHARACTER_LENGTH",
            Self::Check => "CHECK",
            Self::Coalesce => "COALESCE",
            Self::Collate => "COLLATE",
            Self::Collation => "COLLATION",
            Self::Column => "COLUMN",
            Self::Commit => "COMMIT",
            Self::Constraint => "CONSTRAINT",
            Self::Convert => "CONVERT",
            Self::Count => "COUNT",
            Self::Create => "CREATE",
            Self::Cross => "CROSS",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::Date => "DATE",
            Self::Day => "DAY",
            Self::Dec => "DEC",
            Self::Decimal => "DECIMAL",
            Self::Default => "DEFAULT",
            Self::Delete => "DELETE",
            Self::Distinct => "DISTINCT",
            Self::Domain => "DOMAIN",
            Self::Double => "DOUBLE",
            Self::Drop => "DROP",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Escape => "ESCAPE",
            Self::Exists => "EXISTS",
            Self::Extract => "EXTRACT",
            Self::Float => "FLOAT",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Global => "GLOBAL",
            Self::Grant => "GRANT",
            Self::Group => "GROUP",
            Self::Having => "HAVING",
            Self::Hour => "HOUR",
            Self::In => "IN",
            Self::Inner => "INNER",
            Self::Insert => "INSERT",
            Self::Int => "INT",
            Self::Into => "INTO",
            Self::Integer => "INTEGER",
            Self::Interval => "INTERVAL",
            Self::Is => "IS",
            Self::Join => "JOIN",
            Self::Key => "KEY",
            Self::Leading => "LEADING",
            Self::Left => "LEFT",
            Self::Local => "LOCAL",
            Self::Lower => "LOWER",
            Self::Like => "LIKE",
            Self::Match => "MATCH",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Minute => "MINUTE",
            Self::Month => "MONTH",
            Self::National => "NATIONAL",
            Self::Natural => "NATURAL",
            Self::Nchar => "NCHAR",
            Self::No => "NO",
            Self::Not => "NOT",
            Self::Numeric => "NUMERIC",
            Self::Null => "NULL",
            Self::Nullif => "NULLIF",
            Self::OctetLength => "OCTET_LENGTH",
            Self::On => "ON",
            Self::Option => "OPTION",
            Self::Or => "OR",
            Self::Overlaps => "OVERLAPS",
            Self::Outer => "OUTER",
            Self::Partial => "PARTIAL",
            Self::Position => "POSITION",
            Self::Precision => "PRECISION",
            Self::Primary => "PRIMARY",
            Self::Privileges => "PRIVILEGES",
            Self::Public => "PUBLIC",
            Self::Real => "REAL",
            Self::References => "REFERENCES",
            Self::Restrict => "RESTRICT",
            Self::Right => "RIGHT",
            Self::Rollback => "ROLLBACK",
            Self::Schema => "SCHEMA",
            Self::Second => "SECOND",
            Self::Select => "SELECT",
            Self::Set => "SET",
            Self::Smallint => "SMALLINT",
            Self::SessionUser => "SESSION_USER",
            Self::Some => "SOME",
            Self::Substring => "SUBSTRING",
            Self::Sum => "SUM",
            Self::SystemUser => "SYSTEM_USER",
            Self::Table => "TABLE",
            Self::Temporary => "TEMPORARY",
            Self::Then => "THEN",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::To => "TO",
            Self::Trailing => "TRAILING",
            Self::Translate => "TRANSLATE",
            Self::Translation => "TRANSLATION",
            Self::Trim => "TRIM",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::Update => "UPDATE",
            Self::Upper => "UPPER",
            Self::Usage => "USAGE",
            Self::User => "USER",
            Self::Using => "USING",
            Self::Value => "VALUE",
            Self::Values => "VALUES",
            Self::Varchar => "VARCHAR",
            Self::Varying => "VARYING",
            Self::View => "VIEW",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::With => "WITH",
            Self::Work => "WORK",
            Self::Year => "YEAR",
            Self::Zone => "ZONE",
            Self::Identifier => "<identifier>",
            Self::Comment => "<comment>",
            Self::LiteralApproximateNumber => "<approximate number literal>",
            Self::LiteralBitString => "<bit string literal>",
            Self::LiteralCharacterString => "<character string literal>",
            Self::LiteralHexString => "<hex string literal>",
            Self::LiteralNationalCharacterString => "<national character string literal>",
            Self::LiteralSignedDecimal => "<signed decimal literal>",
            Self::LiteralSignedInteger => "<signed integer literal>",
            Self::LiteralUnsignedDecimal => "<unsigned decimal literal>",
            Self::LiteralUnsignedInteger => "<unsigned integer literal>",
        }
    }
}

impl core::fmt::Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Value-expression parsers (numeric/character/datetime/interval) fold a
/// left-associative operator chain until they see one of these symbols;
/// see `parser::value_expression`.
#[must_use]
pub const fn is_value_expression_terminator(sym: Symbol) -> bool {
    matches!(
        sym,
        Symbol::And
            | Symbol::Comma
            | Symbol::Else
            | Symbol::Escape
            | Symbol::End
            | Symbol::Eos
            | Symbol::Equal
            | Symbol::For
            | Symbol::From
            | Symbol::GreaterThan
            | Symbol::Group
            | Symbol::Having
            | Symbol::In
            | Symbol::LessThan
            | Symbol::Like
            | Symbol::Lparen
            | Symbol::Match
            | Symbol::Not
            | Symbol::NotEqual
            | Symbol::Or
            | Symbol::Rparen
            | Symbol::Semicolon
            | Symbol::Then
            | Symbol::Using
            | Symbol::When
            | Symbol::Where
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_set_matches_spec() {
        assert!(is_value_expression_terminator(Symbol::And));
        assert!(is_value_expression_terminator(Symbol::Rparen));
        assert!(is_value_expression_terminator(Symbol::Eos));
        assert!(!is_value_expression_terminator(Symbol::Plus));
        assert!(!is_value_expression_terminator(Symbol::Identifier));
    }

    #[test]
    fn literal_classification() {
        assert!(Symbol::LiteralUnsignedInteger.is_literal());
        assert!(!Symbol::Identifier.is_literal());
        assert!(!Symbol::Create.is_literal());
    }

    #[test]
    fn keyword_classification() {
        assert!(Symbol::Select.is_keyword());
        assert!(!Symbol::Identifier.is_keyword());
        assert!(!Symbol::Lparen.is_keyword());
        assert!(!Symbol::LiteralUnsignedInteger.is_keyword());
    }

    #[test]
    fn spelling_round_trips_for_keywords() {
        assert_eq!(Symbol::Select.spelling(), "SELECT");
        assert_eq!(Symbol::Lparen.spelling(), "(");
    }
}
