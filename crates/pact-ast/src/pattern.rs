use crate::expr::{Expression, LiteralValue};
use pact_util::Pos;

/// A pattern occurring in a `given` case. The identifier `_` is reserved as
/// `Wildcard` by the parser; it is never produced as `Identifier("_", _)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Constructor {
        name: String,
        parameters: Vec<Pattern>,
        pos: Pos,
    },
    Identifier(String, Pos),
    Literal(LiteralValue, Pos),
    Wildcard(Pos),
}

impl Pattern {
    pub fn pos(&self) -> Pos {
        match self {
            Pattern::Constructor { pos, .. } => *pos,
            Pattern::Identifier(_, p) => *p,
            Pattern::Literal(_, p) => *p,
            Pattern::Wildcard(p) => *p,
        }
    }
}

/// One `PATTERN -> EXPRESSION` arm of a `given` expression.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternCase {
    pub pattern: Pattern,
    pub expression: Expression,
    pub pos: Pos,
}
