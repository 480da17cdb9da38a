//! The AST-to-AST optimizer: `Program` in, a freshly copied `Program` with
//! pure rewrites applied plus a count of how many fired.
//!
//! The input is never mutated — every declaration, block, and expression
//! that survives unchanged is still a clone, never a borrow of the
//! original, so callers can hold both the original and the optimized tree
//! side by side. Only `FunctionDeclaration` bodies and contract clauses are
//! rewritten; a `TypeDeclaration`'s invariants are copied verbatim.

mod fold;
mod rewrite;

use pact_ast::{Declaration, FunctionDeclaration, Program};
use rewrite::{rewrite_block, rewrite_expr};

/// Optimizes every function declaration in `program` to a fixpoint and
/// returns the new program alongside the number of rewrites applied.
pub fn optimize(program: &Program) -> (Program, usize) {
    let mut counter = 0usize;
    let declarations = program
        .declarations
        .iter()
        .map(|decl| optimize_declaration(decl, &mut counter))
        .collect();
    (Program::new(program.imports.clone(), declarations), counter)
}

fn optimize_declaration(decl: &Declaration, counter: &mut usize) -> Declaration {
    match decl {
        Declaration::Type(type_decl) => Declaration::Type(type_decl.clone()),
        Declaration::Function(f) => Declaration::Function(optimize_function(f, counter)),
    }
}

fn optimize_function(f: &FunctionDeclaration, counter: &mut usize) -> FunctionDeclaration {
    FunctionDeclaration {
        name: f.name.clone(),
        parameters: f.parameters.clone(),
        return_type: f.return_type.clone(),
        preconditions: f.preconditions.iter().map(|e| fixpoint_expr(e, counter)).collect(),
        postconditions: f.postconditions.iter().map(|e| fixpoint_expr(e, counter)).collect(),
        body: fixpoint_block(&f.body, counter),
        pos: f.pos,
    }
}

/// Repeats one full bottom-up rewrite traversal until it makes no change —
/// "applied bottom-up, recursively, until a traversal yields no change."
fn fixpoint_expr(expr: &pact_ast::Expression, counter: &mut usize) -> pact_ast::Expression {
    let mut current = expr.clone();
    loop {
        let (next, changed) = rewrite_expr(&current, counter);
        if !changed {
            return next;
        }
        current = next;
    }
}

fn fixpoint_block(block: &pact_ast::Block, counter: &mut usize) -> pact_ast::Block {
    let mut current = block.clone();
    loop {
        let (next, changed) = rewrite_block(&current, counter);
        if !changed {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pact_ast::Expression;
    use pact_lex::lex;
    use pact_parse::Parser;

    fn optimize_source(source: &str) -> (Program, usize) {
        let tokens = lex(source).unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        optimize(&program)
    }

    fn body_expr(program: &Program) -> Expression {
        match &program.declarations[0] {
            Declaration::Function(f) => f.body.trailing_expression().unwrap().clone(),
            _ => panic!("expected a function declaration"),
        }
    }

    #[test]
    fn constant_folds_nested_arithmetic() {
        let (program, counter) = optimize_source("define f() -> Int\ngiven\n  (2 + 3) * (4 - 1)\n");
        assert_eq!(body_expr(&program), Expression::IntegerLiteral(15, pact_util::Pos::new(2, 3)));
        assert_eq!(counter, 3);
    }

    #[test]
    fn identity_simplification_drops_plus_zero() {
        let (program, _) = optimize_source("define f(x: Int) -> Int\ngiven\n  x + 0\n");
        assert!(matches!(body_expr(&program), Expression::Identifier(name, _) if name == "x"));
    }

    #[test]
    fn division_by_zero_is_never_folded() {
        let (program, counter) = optimize_source("define f() -> Int\ngiven\n  1 / 0\n");
        assert!(matches!(body_expr(&program), Expression::BinaryOp { .. }));
        assert_eq!(counter, 0);
    }

    #[test]
    fn int_division_folds_to_int_when_exact() {
        let (program, _) = optimize_source("define f() -> Int\ngiven\n  6 / 3\n");
        assert_eq!(body_expr(&program), Expression::IntegerLiteral(2, pact_util::Pos::new(2, 3)));
    }

    #[test]
    fn int_division_folds_to_float_when_inexact() {
        let (program, _) = optimize_source("define f() -> Float\ngiven\n  7 / 2\n");
        assert!(matches!(body_expr(&program), Expression::FloatLiteral(v, _) if (v - 3.5).abs() < 1e-9));
    }

    #[test]
    fn double_negation_collapses() {
        let (program, _) = optimize_source("define f(x: Bool) -> Bool\ngiven\n  !!x\n");
        assert!(matches!(body_expr(&program), Expression::Identifier(name, _) if name == "x"));
    }

    #[test]
    fn when_true_collapses_to_then_expression() {
        let (program, _) = optimize_source("define f() -> Int\ngiven\n  when true\n    1\n");
        assert_eq!(body_expr(&program), Expression::IntegerLiteral(1, pact_util::Pos::new(3, 5)));
    }

    #[test]
    fn when_false_without_else_becomes_placeholder_zero() {
        let (program, _) = optimize_source("define f() -> Int\ngiven\n  when false\n    1\n");
        assert!(matches!(body_expr(&program), Expression::IntegerLiteral(0, _)));
    }

    #[test]
    fn function_call_callee_is_never_folded() {
        let (program, _) = optimize_source(
            "define identity(x: Int) -> Int\ngiven\n  x\ndefine f() -> Int\ngiven\n  identity(1 + 2)\n",
        );
        match &program.declarations[1] {
            Declaration::Function(f) => match f.body.trailing_expression().unwrap() {
                Expression::FunctionCall { arguments, .. } => {
                    assert_eq!(arguments[0], Expression::IntegerLiteral(3, pact_util::Pos::new(4, 12)));
                }
                other => panic!("expected a function call, got {other:?}"),
            },
            _ => panic!("expected a function declaration"),
        }
    }

    #[test]
    fn type_declaration_invariants_are_copied_verbatim() {
        let (program, counter) = optimize_source("type PositiveInt = Int\n  invariant value > 0 + 0\n");
        assert_eq!(counter, 0);
        match &program.declarations[0] {
            Declaration::Type(t) => {
                assert!(matches!(t.invariants[0], Expression::BinaryOp { .. }));
            }
            _ => panic!("expected a type declaration"),
        }
    }
}
