use pact_util::Pos;
use thiserror::Error;

/// A single type-checking failure. The checker never stops at the first one
/// of these — see [`crate::check_program`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeCheckError {
    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch {
        expected: String,
        found: String,
        pos: Pos,
    },

    #[error("undefined identifier `{name}`")]
    UndefinedIdentifier { name: String, pos: Pos },

    #[error("`{name}` expects {expected} argument(s), found {found}")]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
        pos: Pos,
    },

    #[error("contract clause must be Bool, found {found}")]
    NonBoolContract { found: String, pos: Pos },

    #[error("invariant must be Bool, found {found}")]
    NonBoolInvariant { found: String, pos: Pos },

    #[error("function body type {found} is not compatible with declared return type {expected}")]
    IncompatibleReturn {
        expected: String,
        found: String,
        pos: Pos,
    },
}

impl TypeCheckError {
    pub fn pos(&self) -> Pos {
        match self {
            TypeCheckError::Mismatch { pos, .. }
            | TypeCheckError::UndefinedIdentifier { pos, .. }
            | TypeCheckError::WrongArity { pos, .. }
            | TypeCheckError::NonBoolContract { pos, .. }
            | TypeCheckError::NonBoolInvariant { pos, .. }
            | TypeCheckError::IncompatibleReturn { pos, .. } => *pos,
        }
    }
}
