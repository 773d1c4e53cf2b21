use crate::ast::{Statement, UpdateAssignment, UpdateStatement, UpdateValue};
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_update_value(&mut self) -> PResult<UpdateValue> {
        if self.eat(Symbol::Null) {
            return Ok(UpdateValue::Null);
        }
        if self.eat(Symbol::Default) {
            return Ok(UpdateValue::Default);
        }
        Ok(UpdateValue::Value(Box::new(self.require_value_expression()?)))
    }

    fn parse_update_assignment(&mut self) -> PResult<UpdateAssignment> {
        let column = self.expect_identifier()?;
        self.expect(Symbol::Equal)?;
        let value = self.parse_update_value()?;
        Ok(UpdateAssignment { column, value })
    }

    /// `UPDATE <name> SET <col = value | NULL | DEFAULT>, … [WHERE …]`
    /// (§4.8).
    pub(crate) fn parse_update_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.at(Symbol::Update) {
            return Ok(None);
        }
        self.bump();
        let table_name = self.expect_identifier()?;
        self.expect(Symbol::Set)?;
        let mut assignments = vec![self.parse_update_assignment()?];
        while self.eat(Symbol::Comma) {
            assignments.push(self.parse_update_assignment()?);
        }
        let where_clause = if self.eat(Symbol::Where) {
            Some(Box::new(self.require_search_condition()?))
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(Some(Statement::Update(UpdateStatement {
            table_name,
            assignments,
            where_clause,
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::UpdateValue;
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn multiple_assignments_with_where() {
        let result = parse("UPDATE t SET a = 1, b = NULL WHERE c = 2;");
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::Update(stmt) = &result.statements[0] else {
            panic!("expected Update");
        };
        assert_eq!(stmt.assignments.len(), 2);
        assert!(matches!(stmt.assignments[0].value, UpdateValue::Value(_)));
        assert!(matches!(stmt.assignments[1].value, UpdateValue::Null));
        assert!(stmt.where_clause.is_some());
    }

    #[test]
    fn assignment_to_default() {
        let result = parse("UPDATE t SET a = DEFAULT;");
        let Statement::Update(stmt) = &result.statements[0] else {
            panic!("expected Update");
        };
        assert!(matches!(stmt.assignments[0].value, UpdateValue::Default));
    }
}
