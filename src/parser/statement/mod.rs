//! One file per statement kind (§4.8).

pub mod alter_table;
pub mod create_schema;
pub mod create_table;
pub mod create_view;
pub mod delete;
pub mod drop_schema;
pub mod drop_table;
pub mod drop_view;
pub mod grant;
pub mod insert;
pub mod select;
pub mod transaction;
pub mod update;

use crate::ast::DropBehaviour;
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `[CASCADE|RESTRICT]`, defaulting to `CASCADE` when neither keyword is
    /// present (§8 boundary behavior example #4).
    pub(crate) fn parse_drop_behaviour(&mut self) -> DropBehaviour {
        if self.eat(Symbol::Restrict) {
            DropBehaviour::Restrict
        } else {
            self.eat(Symbol::Cascade);
            DropBehaviour::Cascade
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::result::ParseCode;
    use crate::Statement;

    #[test]
    fn drop_behaviour_defaults_to_cascade_and_honors_explicit_keywords() {
        let result = parse("DROP TABLE t RESTRICT; DROP TABLE u CASCADE; DROP TABLE v;");
        assert_eq!(result.code, ParseCode::Ok);
        let behaviours: Vec<_> = result
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::DropTable(drop) => drop.behaviour,
                other => panic!("expected DropTable, got {other:?}"),
            })
            .collect();
        assert_eq!(
            behaviours,
            vec![
                crate::ast::DropBehaviour::Restrict,
                crate::ast::DropBehaviour::Cascade,
                crate::ast::DropBehaviour::Cascade,
            ]
        );
    }
}
