//! The closed AST family shared by every pass.
//!
//! Every node here is a plain data type: no behavior beyond `pos()`
//! accessors and the derived `Debug`/`Clone`/`PartialEq` impls the other
//! passes lean on (the optimizer's "fresh tree, unchanged original"
//! guarantee is checked in tests by structural equality). Closed, exhaustive
//! enums stand in for the runtime `isinstance` dispatch the original
//! implementation used, so adding a node kind without updating every pass is
//! a compile error rather than a silent gap.

mod decl;
mod expr;
mod pattern;
mod program;
mod stmt;
mod ty;

pub use decl::{
    Declaration, FunctionDeclaration, Parameter, RefinedType, SimpleType, SumType,
    TypeDeclaration, TypeDefinition, Variant,
};
pub use expr::{BinOp, Expression, LiteralValue, UnOp};
pub use pattern::{Pattern, PatternCase};
pub use program::{Import, Program};
pub use stmt::{Block, Statement};
pub use ty::{PrimitiveType, Type};

pub use pact_util::Pos;
