//! Recursive-descent parser over the SQL-92 grammar (§4).
//!
//! # Production convention
//!
//! Every grammar production is a `Parser` method of shape
//! `fn parse_x(&mut self) -> Result<Option<X>, ParseError>`:
//!
//! - `Ok(Some(node))` — the production matched and consumed tokens up to
//!   (but not including) the first token after it.
//! - `Ok(None)` — the production did not match at the current position
//!   (wrong leading symbol); the parser cursor is restored to where it was
//!   on entry and the caller is free to try an alternative.
//! - `Err(e)` — the production committed (it recognized its leading
//!   symbol) but then found a syntax error; this is sticky; callers
//!   propagate it with `?` rather than trying another alternative.
//!
//! A production that wants to report "non-committal" after consuming some
//! tokens must restore the cursor itself with a [`Checkpoint`] before
//! returning `Ok(None)`; [`Parser::try_candidates`] does this automatically
//! for whole-statement alternation (§4.4).
//!
//! # Module layout
//!
//! | Module | Grammar surface |
//! |---|---|
//! | `statement` | top-level driver, one file per statement kind |
//! | `data_type` | `<data type>` (§4.6) |
//! | `column` | column definitions, column/table constraints (§4.7) |
//! | `value_expression` | numeric/character/datetime/interval expressions (§4.9) |
//! | `predicate` | search conditions, boolean terms/factors, predicates (§4.9) |
//! | `query_expression` | `SELECT`, table expressions, query primaries |
//! | `table_reference` | table references and joins |

pub mod column;
pub mod data_type;
pub mod error;
pub mod predicate;
pub mod query_expression;
pub mod statement;
pub mod table_reference;
pub mod value_expression;

use crate::ast::Statement;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::result::ParseResult;
use crate::span::Span;
use crate::symbol::Symbol;
use crate::token::Token;

pub use error::ParseError;

type PResult<T> = Result<T, ParseError>;

/// A saved `(current token, lexer cursor)` pair. The lexer's cursor is
/// always the position just past `current`'s span, so saving both and
/// restoring them together exactly undoes any number of `bump()`s.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    current: Token,
    lexer_pos: usize,
}

/// The per-parse bundle: the lexer and the current lookahead token. Options
/// are threaded through so productions can check
/// `disable_statement_construction` before allocating AST nodes (§4.10).
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current: Token,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next();
        Self {
            input,
            lexer,
            current,
            options,
        }
    }

    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Skips AST allocation when `true` (§4.10); productions still walk the
    /// grammar and advance the cursor either way.
    #[must_use]
    pub const fn construct(&self) -> bool {
        !self.options.disable_statement_construction
    }

    #[must_use]
    pub(crate) const fn symbol(&self) -> Symbol {
        self.current.symbol
    }

    #[must_use]
    pub(crate) const fn span(&self) -> Span {
        self.current.span
    }

    #[must_use]
    pub(crate) fn text(&self) -> &'a str {
        self.current.text(self.input)
    }

    pub(crate) fn at(&self, symbol: Symbol) -> bool {
        self.symbol() == symbol
    }

    pub(crate) fn at_any(&self, symbols: &[Symbol]) -> bool {
        symbols.contains(&self.symbol())
    }

    /// Consumes and returns the current token, advancing the lexer.
    pub(crate) fn bump(&mut self) -> Token {
        let tok = self.current;
        self.current = self.lexer.next();
        tok
    }

    /// Consumes the current token if it matches `symbol`.
    pub(crate) fn eat(&mut self, symbol: Symbol) -> bool {
        if self.at(symbol) {
            self.bump();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            current: self.current,
            lexer_pos: self.lexer.cursor(),
        }
    }

    pub(crate) fn restore(&mut self, cp: Checkpoint) {
        self.current = cp.current;
        self.lexer.seek(cp.lexer_pos);
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.span())
    }

    /// "Expected X but found Y" (§4.3, `expect_error`).
    pub(crate) fn error_expected(&self, expected: &'static str) -> ParseError {
        ParseError::expected_symbol(expected, self.symbol(), self.span())
    }

    /// Consumes `symbol` or raises a syntax error (§4.3, `expect_error`).
    pub(crate) fn expect(&mut self, symbol: Symbol) -> PResult<Token> {
        if self.at(symbol) {
            Ok(self.bump())
        } else {
            Err(ParseError::expected_symbol(
                symbol.spelling(),
                self.symbol(),
                self.span(),
            ))
        }
    }

    /// Walks a fixed symbol list, reporting a syntax error on the first
    /// mismatch (§4.5, `expect_sequence`).
    pub(crate) fn expect_sequence(&mut self, symbols: &[Symbol]) -> PResult<()> {
        for &symbol in symbols {
            self.expect(symbol)?;
        }
        Ok(())
    }

    /// Peeks the same fixed symbol list without committing (§4.5,
    /// `has_sequence`): the first symbol is checked against `current`, the
    /// rest against a throwaway copy of the lexer (cheap: no heap data).
    pub(crate) fn has_sequence(&self, symbols: &[Symbol]) -> bool {
        let Some((&first, rest)) = symbols.split_first() else {
            return true;
        };
        if self.symbol() != first {
            return false;
        }
        let mut lookahead = self.lexer;
        rest.iter().all(|&sym| lookahead.next().symbol == sym)
    }

    /// Parses an `<identifier>` (including delimited identifiers) and
    /// returns its span.
    pub(crate) fn expect_identifier(&mut self) -> PResult<Span> {
        if self.at(Symbol::Identifier) {
            Ok(self.bump().span)
        } else {
            Err(self.error_expected("<identifier>"))
        }
    }

    /// Parses an unsigned-integer-flavored token's lexeme as a `u64`
    /// (§4.6: "an inline `atoi`-like conversion on the token's lexeme").
    pub(crate) fn expect_unsigned_integer(&mut self) -> PResult<u64> {
        if !self.at(Symbol::LiteralUnsignedInteger) {
            return Err(self.error_expected("<unsigned integer>"));
        }
        let text = self.text();
        let tok = self.bump();
        text.parse::<u64>()
            .map_err(|_| ParseError::new("Malformed unsigned integer literal", tok.span))
    }

    /// Runs each candidate in turn, restoring the cursor between
    /// non-committal misses (§4.4).
    pub(crate) fn try_candidates<T>(
        &mut self,
        candidates: &[fn(&mut Self) -> PResult<Option<T>>],
    ) -> PResult<Option<T>> {
        for candidate in candidates {
            let cp = self.checkpoint();
            match candidate(self) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => self.restore(cp),
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    /// Every statement parser terminates by requiring `;` or EOS next
    /// (§4.8); a different follow is a syntax error. Consumes a trailing
    /// `;` if present so the top-level driver doesn't see it twice.
    pub(crate) fn expect_statement_end(&mut self) -> PResult<()> {
        if self.eat(Symbol::Semicolon) || self.at(Symbol::Eos) {
            Ok(())
        } else {
            Err(self.error_expected("';' or <end of input>"))
        }
    }

    /// Top-level driver (§4.4): loops over statements separated by `;` and
    /// dispatches on the leading keyword.
    fn run(&mut self) -> ParseResult {
        let mut statements = Vec::new();
        loop {
            while self.eat(Symbol::Semicolon) {}
            if self.at(Symbol::Eos) {
                break;
            }
            match self.parse_statement() {
                // `disable_statement_construction` does not skip the grammar
                // walk (every production still runs exactly the same way,
                // which is what keeps `parse(s, {disable_statement_construction:
                // true}).code == parse(s).code` true by construction) — it
                // only discards the built statement instead of retaining it,
                // so a grammar-only benchmark run does not keep accumulating
                // AST memory across a large input (§4.3, §8).
                Ok(Some(stmt)) => {
                    if self.construct() {
                        statements.push(stmt);
                    }
                }
                Ok(None) => {
                    let err = self.error("Failed to recognize any valid SQL statement.");
                    return ParseResult::syntax_error(err.render(self.input), statements);
                }
                Err(err) => {
                    return ParseResult::syntax_error(err.render(self.input), statements);
                }
            }
        }
        ParseResult::ok(statements)
    }

    fn parse_statement(&mut self) -> PResult<Option<Statement>> {
        match self.symbol() {
            Symbol::Create => self.try_candidates(&[
                Self::parse_create_table_stmt,
                Self::parse_create_view_stmt,
                Self::parse_create_schema_stmt,
            ]),
            Symbol::Drop => self.try_candidates(&[
                Self::parse_drop_table_stmt,
                Self::parse_drop_view_stmt,
                Self::parse_drop_schema_stmt,
            ]),
            Symbol::Alter => self.parse_alter_table_stmt(),
            Symbol::Select => self.parse_select_stmt(),
            Symbol::Insert => self.parse_insert_stmt(),
            Symbol::Delete => self.parse_delete_stmt(),
            Symbol::Update => self.parse_update_stmt(),
            Symbol::Commit | Symbol::Rollback => self.try_candidates(&[
                Self::parse_commit_stmt,
                Self::parse_rollback_stmt,
            ]),
            Symbol::Grant => self.parse_grant_stmt(),
            _ => Ok(None),
        }
    }
}

/// Runs a full parse with default options. The single library entry point
/// this wraps is re-exported at the crate root as `sqltoast::parse`.
#[must_use]
pub fn parse(input: &str) -> ParseResult {
    parse_with_options(input, ParseOptions::default())
}

/// Runs a full parse with caller-supplied options (§6).
#[must_use]
pub fn parse_with_options(input: &str, options: ParseOptions) -> ParseResult {
    if input.is_empty() {
        return ParseResult::input_error("Nothing to parse: input is empty");
    }
    Parser::new(input, options).run()
}
