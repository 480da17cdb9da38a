use pact_util::Pos;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("{pos}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        pos: Pos,
    },

    #[error("{pos}: unexpected token {found}")]
    Unexpected { found: String, pos: Pos },
}
