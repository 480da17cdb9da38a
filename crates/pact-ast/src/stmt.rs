use crate::expr::Expression;
use crate::ty::Type;
use pact_util::Pos;

/// A statement inside a block. The parser only ever produces
/// `ExpressionStatement`; `LetBinding` and `Assignment` exist in the model
/// for syntax the grammar does not yet expose, so later passes already
/// handle them exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Block(Block),
    LetBinding {
        name: String,
        type_annotation: Option<Type>,
        value: Expression,
        pos: Pos,
    },
    Assignment {
        target: String,
        value: Expression,
        pos: Pos,
    },
    ExpressionStatement { expression: Expression, pos: Pos },
}

impl Statement {
    pub fn pos(&self) -> Pos {
        match self {
            Statement::Block(b) => b.pos,
            Statement::LetBinding { pos, .. }
            | Statement::Assignment { pos, .. }
            | Statement::ExpressionStatement { pos, .. } => *pos,
        }
    }
}

/// An ordered sequence of statements. A block's value, where one is needed
/// (a function body, a `when`/`otherwise` arm), is the value of its last
/// statement when that statement is an `ExpressionStatement`; otherwise the
/// block has no expression value.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub pos: Pos,
}

impl Block {
    pub fn new(statements: Vec<Statement>, pos: Pos) -> Self {
        Self { statements, pos }
    }

    /// The expression of the last statement, if the block ends in one.
    pub fn trailing_expression(&self) -> Option<&Expression> {
        match self.statements.last()? {
            Statement::ExpressionStatement { expression, .. } => Some(expression),
            _ => None,
        }
    }
}
