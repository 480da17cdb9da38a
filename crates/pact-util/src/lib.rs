//! Shared primitives used by every pass: source positions and diagnostics.
//!
//! This crate carries no compiler logic of its own. It exists so that the
//! lexer, parser, checker, optimizer, verifier, and code generator can agree
//! on one small vocabulary for "where in the source did this happen" and
//! "how do I report that to a human" without each pass inventing its own.

mod diagnostic;
mod pos;

pub use diagnostic::Diagnostic;
pub use pos::Pos;
