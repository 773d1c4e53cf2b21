use crate::ast::{DropSchemaStatement, Statement};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `DROP SCHEMA <name> [CASCADE|RESTRICT]` (§4.8).
    pub(crate) fn parse_drop_schema_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Drop, Symbol::Schema]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let schema_name = self.expect_identifier()?;
        let behaviour = self.parse_drop_behaviour();
        self.expect_statement_end()?;
        Ok(Some(Statement::DropSchema(DropSchemaStatement {
            schema_name,
            behaviour,
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn drop_schema_requires_a_name() {
        let result = parse("DROP SCHEMA s;");
        assert_eq!(result.code, ParseCode::Ok);
        assert!(matches!(result.statements[0], Statement::DropSchema(_)));
    }

    #[test]
    fn missing_schema_name_is_a_syntax_error() {
        let result = parse("DROP SCHEMA;");
        assert_eq!(result.code, ParseCode::SyntaxError);
    }
}
