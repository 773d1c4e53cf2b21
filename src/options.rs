//! Parse-time configuration.

/// The SQL dialect a parse should target. Only [`Dialect::Sql92`] is
/// implemented; the variant exists so callers and future dialect work have
/// a stable slot to target (§1, Non-goals: "no SQL dialects beyond SQL-92
/// (though the parser options reserve a dialect slot)").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Sql92,
}

/// Per-parse configuration. The library's entire configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// When set, every production still validates the grammar and advances
    /// the lexer cursor, but skips AST node allocation. Exists for
    /// grammar-only benchmarking; see the invariant
    /// `parse(s, {disable_statement_construction: true}).code == parse(s).code`.
    pub disable_statement_construction: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            disable_statement_construction: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let opts = ParseOptions::default();
        assert_eq!(opts.dialect, Dialect::Sql92);
        assert!(!opts.disable_statement_construction);
    }
}
