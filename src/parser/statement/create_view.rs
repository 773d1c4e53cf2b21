use crate::ast::{CheckOption, CreateViewStatement, Statement};
use crate::span::Span;
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_view_column_list(&mut self) -> PResult<Vec<Span>> {
        if !self.eat(Symbol::Lparen) {
            return Ok(Vec::new());
        }
        let mut columns = vec![self.expect_identifier()?];
        while self.eat(Symbol::Comma) {
            columns.push(self.expect_identifier()?);
        }
        self.expect(Symbol::Rparen)?;
        Ok(columns)
    }

    /// `WITH [CASCADED|LOCAL] CHECK OPTION`, if present. `CASCADED` is the
    /// default when neither keyword is given.
    fn parse_check_option(&mut self) -> PResult<Option<CheckOption>> {
        if !self.eat(Symbol::With) {
            return Ok(None);
        }
        let option = if self.eat(Symbol::Local) {
            CheckOption::Local
        } else {
            self.eat(Symbol::Cascaded);
            CheckOption::Cascaded
        };
        self.expect(Symbol::Check)?;
        self.expect(Symbol::Option)?;
        Ok(Some(option))
    }

    /// `CREATE VIEW <name> [( <columns> )] AS <query expression> [WITH
    /// [CASCADED|LOCAL] CHECK OPTION]` (§3).
    pub(crate) fn parse_create_view_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.has_sequence(&[Symbol::Create, Symbol::View]) {
            return Ok(None);
        }
        self.bump();
        self.bump();
        let view_name = self.expect_identifier()?;
        let columns = self.parse_view_column_list()?;
        self.expect(Symbol::As)?;
        let query = Box::new(self.require_query_expression()?);
        let check_option = self.parse_check_option()?;
        self.expect_statement_end()?;
        Ok(Some(Statement::CreateView(CreateViewStatement {
            view_name,
            columns,
            query,
            check_option,
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::CheckOption;
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn view_with_column_list_and_check_option() {
        let result = parse("CREATE VIEW v (a, b) AS SELECT x, y FROM t WITH LOCAL CHECK OPTION;");
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::CreateView(stmt) = &result.statements[0] else {
            panic!("expected CreateView");
        };
        assert_eq!(stmt.columns.len(), 2);
        assert_eq!(stmt.check_option, Some(CheckOption::Local));
    }

    #[test]
    fn view_without_column_list_or_check_option() {
        let result = parse("CREATE VIEW v AS SELECT x FROM t;");
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::CreateView(stmt) = &result.statements[0] else {
            panic!("expected CreateView");
        };
        assert!(stmt.columns.is_empty());
        assert!(stmt.check_option.is_none());
    }

    #[test]
    fn check_option_defaults_to_cascaded() {
        let result = parse("CREATE VIEW v AS SELECT x FROM t WITH CHECK OPTION;");
        let Statement::CreateView(stmt) = &result.statements[0] else {
            panic!("expected CreateView");
        };
        assert_eq!(stmt.check_option, Some(CheckOption::Cascaded));
    }
}
