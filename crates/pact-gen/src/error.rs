use pact_util::Pos;
use thiserror::Error;

/// The generator is a total function over every node kind the closed AST
/// actually produces; this exists for the one node shape the spec calls out
/// as representable-but-unsupported: a `when`/`given` block in expression
/// position whose last statement isn't a bare expression, so there is no
/// single Python expression to lower it to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeGenError {
    #[error("cannot lower {kind} to an expression at {pos}")]
    UnsupportedNode { kind: String, pos: Pos },
}
