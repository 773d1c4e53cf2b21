use crate::ast::{
    GrantObject, GrantObjectKind, GrantStatement, Grantee, Privilege, PrivilegeSpec, Statement,
};
use crate::span::Span;
use crate::symbol::Symbol;

use super::super::{PResult, Parser};

impl<'a> Parser<'a> {
    fn parse_privilege_columns(&mut self) -> PResult<Vec<Span>> {
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

    /// A single `<action>`: `SELECT | DELETE | INSERT | USAGE | UPDATE
    /// [(cols)] | REFERENCES [(cols)]` (§4.8).
    fn parse_privilege_spec(&mut self) -> PResult<PrivilegeSpec> {
        match self.symbol() {
            Symbol::Select => {
                self.bump();
                Ok(PrivilegeSpec::Simple(Privilege::Select))
            }
            Symbol::Insert => {
                self.bump();
                Ok(PrivilegeSpec::Simple(Privilege::Insert))
            }
            Symbol::Delete => {
                self.bump();
                Ok(PrivilegeSpec::Simple(Privilege::Delete))
            }
            Symbol::Usage => {
                self.bump();
                Ok(PrivilegeSpec::Simple(Privilege::Usage))
            }
            Symbol::Update => {
                self.bump();
                Ok(PrivilegeSpec::Update(self.parse_privilege_columns()?))
            }
            Symbol::References => {
                self.bump();
                Ok(PrivilegeSpec::References(self.parse_privilege_columns()?))
            }
            _ => Err(self.error_expected(
                "SELECT, INSERT, DELETE, UPDATE, REFERENCES, or USAGE",
            )),
        }
    }

    /// `<privileges>`: `ALL PRIVILEGES` or a comma-delimited action list.
    fn parse_privileges(&mut self) -> PResult<Vec<PrivilegeSpec>> {
        if self.eat(Symbol::All) {
            self.eat(Symbol::Privileges);
            return Ok(vec![PrivilegeSpec::Simple(Privilege::All)]);
        }
        let mut privileges = vec![self.parse_privilege_spec()?];
        while self.eat(Symbol::Comma) {
            privileges.push(self.parse_privilege_spec()?);
        }
        Ok(privileges)
    }

    /// `[TABLE | DOMAIN | COLLATION | CHARACTER SET | TRANSLATION]? <name>`;
    /// a bare name defaults to `TABLE`, the only object kind SQL-92 lets you
    /// elide the keyword for.
    fn parse_grant_object(&mut self) -> PResult<GrantObject> {
        let kind = match self.symbol() {
            Symbol::Table => {
                self.bump();
                GrantObjectKind::Table
            }
            Symbol::Domain => {
                self.bump();
                GrantObjectKind::Domain
            }
            Symbol::Collation => {
                self.bump();
                GrantObjectKind::Collation
            }
            Symbol::Translation => {
                self.bump();
                GrantObjectKind::Translation
            }
            _ if self.has_sequence(&[Symbol::Character, Symbol::Set]) => {
                self.bump();
                self.bump();
                GrantObjectKind::CharacterSet
            }
            _ => GrantObjectKind::Table,
        };
        let name = self.expect_identifier()?;
        Ok(GrantObject { kind, name })
    }

    fn parse_grantee(&mut self) -> PResult<Grantee> {
        if self.eat(Symbol::Public) {
            return Ok(Grantee::Public);
        }
        Ok(Grantee::Identifier(self.expect_identifier()?))
    }

    /// Standard privilege grants over tables/domains/collations/character
    /// sets/translations, to a grantee or `PUBLIC`, with optional `WITH
    /// GRANT OPTION` (§4.8).
    pub(crate) fn parse_grant_stmt(&mut self) -> PResult<Option<Statement>> {
        if !self.eat(Symbol::Grant) {
            return Ok(None);
        }
        let privileges = self.parse_privileges()?;
        self.expect(Symbol::On)?;
        let object = self.parse_grant_object()?;
        self.expect(Symbol::To)?;
        let mut grantees = vec![self.parse_grantee()?];
        while self.eat(Symbol::Comma) {
            grantees.push(self.parse_grantee()?);
        }
        let with_grant_option = self.has_sequence(&[Symbol::With, Symbol::Grant, Symbol::Option]);
        if with_grant_option {
            self.bump();
            self.bump();
            self.bump();
        }
        self.expect_statement_end()?;
        Ok(Some(Statement::Grant(GrantStatement {
            privileges,
            object,
            grantees,
            with_grant_option,
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Grantee, GrantObjectKind, Privilege, PrivilegeSpec};
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn all_privileges_to_public_with_grant_option() {
        let result = parse("GRANT ALL PRIVILEGES ON t TO PUBLIC WITH GRANT OPTION;");
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::Grant(stmt) = &result.statements[0] else {
            panic!("expected Grant");
        };
        assert_eq!(stmt.privileges, vec![PrivilegeSpec::Simple(Privilege::All)]);
        assert_eq!(stmt.object.kind, GrantObjectKind::Table);
        assert_eq!(stmt.grantees, vec![Grantee::Public]);
        assert!(stmt.with_grant_option);
    }

    #[test]
    fn specific_privileges_with_column_lists_to_multiple_grantees() {
        let result = parse("GRANT SELECT, UPDATE (a, b) ON t TO u1, u2;");
        assert_eq!(result.code, ParseCode::Ok);
        let Statement::Grant(stmt) = &result.statements[0] else {
            panic!("expected Grant");
        };
        assert_eq!(stmt.privileges.len(), 2);
        assert!(matches!(stmt.privileges[0], PrivilegeSpec::Simple(Privilege::Select)));
        match &stmt.privileges[1] {
            PrivilegeSpec::Update(cols) => assert_eq!(cols.len(), 2),
            other => panic!("expected PrivilegeSpec::Update, got {other:?}"),
        }
        assert_eq!(stmt.grantees.len(), 2);
        assert!(!stmt.with_grant_option);
    }

    #[test]
    fn grant_on_domain() {
        let result = parse("GRANT USAGE ON DOMAIN d TO u;");
        let Statement::Grant(stmt) = &result.statements[0] else {
            panic!("expected Grant");
        };
        assert_eq!(stmt.object.kind, GrantObjectKind::Domain);
    }

    #[test]
    fn grant_on_character_set() {
        let result = parse("GRANT USAGE ON CHARACTER SET cs TO u;");
        let Statement::Grant(stmt) = &result.statements[0] else {
            panic!("expected Grant");
        };
        assert_eq!(stmt.object.kind, GrantObjectKind::CharacterSet);
    }
}
