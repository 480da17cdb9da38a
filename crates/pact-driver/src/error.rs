//! Error handling for the `pactc` CLI.
//!
//! Each pass keeps its own `thiserror` error type; this enum composes them
//! with `#[error(transparent)]` so the driver can propagate a single `Result`
//! through its command dispatch without flattening pass-specific detail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PactcError {
    #[error(transparent)]
    Lex(#[from] pact_lex::LexError),

    #[error(transparent)]
    Parse(#[from] pact_parse::ParseError),

    #[error(transparent)]
    Gen(#[from] pact_gen::CodeGenError),

    #[error("{0} type error(s) found")]
    TypeCheck(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PactcError>;
