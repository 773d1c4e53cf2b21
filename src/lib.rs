//! # sqltoast
//!
//! A zero-copy lexer and hand-written recursive-descent parser for SQL-92.
//!
//! This crate provides:
//! - A zero-copy lexer that turns a source buffer into a stream of tokens
//!   with precise source spans
//! - A hand-written recursive-descent parser following the SQL-92 grammar
//! - A closed, tagged-variant abstract syntax tree rooted at [`Statement`]
//!
//! It is not a query engine: there is no binding, name resolution, semantic
//! validation, or execution. Consumers are SQL tooling — linters,
//! rewriters, schema analyzers, dialect translators, pretty-printers — that
//! want a structured tree to walk.
//!
//! ## Parsing SQL
//!
//! ```rust
//! use sqltoast::parse;
//!
//! let result = parse("SELECT a, b FROM t WHERE a > 1;");
//! assert!(result.is_ok());
//! assert_eq!(result.statements.len(), 1);
//! ```
//!
//! ## Syntax errors
//!
//! A rejected parse carries a caret-marked, human-readable description of
//! where the grammar broke down:
//!
//! ```rust
//! use sqltoast::{parse, ParseCode};
//!
//! let result = parse("CREATE TABLE t (");
//! assert_eq!(result.code, ParseCode::SyntaxError);
//! assert!(result.error_text.unwrap().contains("Expected"));
//! ```

pub mod ast;
pub mod keyword;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod result;
pub mod span;
pub mod symbol;
pub mod token;

pub use ast::Statement;
pub use lexer::Lexer;
pub use options::{Dialect, ParseOptions};
pub use parser::{parse, parse_with_options, ParseError, Parser};
pub use result::{ParseCode, ParseResult};
pub use span::Span;
pub use symbol::Symbol;
pub use token::Token;
