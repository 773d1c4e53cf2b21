//! The outcome of a parse.

use crate::ast::Statement;
use crate::parser::error::ParseError;

/// The top-level status of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCode {
    Ok,
    /// Nothing to parse: the input buffer was empty.
    InputError,
    SyntaxError,
}

/// The cumulative outcome of a parse: a status code, the statements
/// recognized before any error, and (on `SyntaxError`) a human-readable,
/// caret-marked description of what went wrong and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub code: ParseCode,
    pub error_text: Option<String>,
    pub statements: Vec<Statement>,
}

impl ParseResult {
    pub(crate) fn ok(statements: Vec<Statement>) -> Self {
        Self {
            code: ParseCode::Ok,
            error_text: None,
            statements,
        }
    }

    pub(crate) fn input_error(message: impl Into<String>) -> Self {
        Self {
            code: ParseCode::InputError,
            error_text: Some(message.into()),
            statements: Vec::new(),
        }
    }

    pub(crate) fn syntax_error(text: String, statements: Vec<Statement>) -> Self {
        Self {
            code: ParseCode::SyntaxError,
            error_text: Some(text),
            statements,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, ParseCode::Ok)
    }

    /// Converts this result into an idiomatic `Result`, for callers that
    /// prefer `?`-based control flow over matching on [`ParseResult::code`].
    /// The error variant carries only the rendered text (a fresh
    /// [`ParseError`] with no source span, since by this point the
    /// caret-marked text is the richer artifact); callers that need the
    /// structured span should match on `code`/`error_text` directly, or
    /// call `parse` and inspect the error produced deeper in the parser.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `self.code` is not [`ParseCode::Ok`].
    pub fn into_result(self) -> Result<Vec<Statement>, ParseError> {
        match self.code {
            ParseCode::Ok => Ok(self.statements),
            ParseCode::InputError | ParseCode::SyntaxError => Err(ParseError::new(
                self.error_text.unwrap_or_default(),
                crate::span::Span::default(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_has_no_error_text() {
        let result = ParseResult::ok(Vec::new());
        assert!(result.is_ok());
        assert_eq!(result.code, ParseCode::Ok);
        assert!(result.error_text.is_none());
    }

    #[test]
    fn input_error_carries_a_message_and_no_statements() {
        let result = ParseResult::input_error("empty input");
        assert!(!result.is_ok());
        assert_eq!(result.code, ParseCode::InputError);
        assert_eq!(result.error_text.as_deref(), Some("empty input"));
        assert!(result.statements.is_empty());
    }

    #[test]
    fn syntax_error_keeps_statements_recognized_before_the_failure() {
        let result = ParseResult::syntax_error("Expected ';'".to_string(), Vec::new());
        assert_eq!(result.code, ParseCode::SyntaxError);
        assert!(result.statements.is_empty());
    }

    #[test]
    fn into_result_round_trips_ok_and_rejects_errors() {
        let ok = ParseResult::ok(Vec::new());
        assert_eq!(ok.into_result().unwrap(), Vec::new());

        let err = ParseResult::syntax_error("bad input".to_string(), Vec::new());
        assert!(err.into_result().is_err());
    }
}
