use crate::decl::Declaration;
use pact_util::Pos;

#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub module_path: String,
    pub pos: Pos,
}

/// The root of every AST: an ordered list of imports followed by an ordered
/// list of declarations. Order is insertion order throughout, and every
/// later pass must preserve it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn new(imports: Vec<Import>, declarations: Vec<Declaration>) -> Self {
        Self {
            imports,
            declarations,
        }
    }
}
