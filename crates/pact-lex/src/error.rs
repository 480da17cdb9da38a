use pact_util::Pos;
use thiserror::Error;

/// Every way tokenization can fail. The lexer stops at the first one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("{0}: tabs are not allowed, use 2 spaces for indentation")]
    TabInIndentation(Pos),

    #[error("{0}: indentation must be a multiple of 2 spaces")]
    OddIndentation(Pos),

    #[error("{0}: inconsistent indentation")]
    InconsistentIndentation(Pos),

    #[error("{start}: unterminated string literal")]
    UnterminatedString { start: Pos },

    #[error("{start}: unterminated multi-line comment")]
    UnterminatedComment { start: Pos },

    #[error("{0}: unexpected character {1:?}")]
    UnexpectedCharacter(Pos, char),
}
