//! The bottom-up traversal: rewrite every child first, then try to simplify
//! the resulting node. Each function returns the rewritten tree alongside
//! whether anything in it changed, so the caller can tell when a fixpoint
//! has been reached.

use crate::fold::try_simplify_node;
use pact_ast::{Block, Expression, PatternCase, Statement};

pub(crate) fn rewrite_expr(expr: &Expression, counter: &mut usize) -> (Expression, bool) {
    let (rewritten, children_changed) = match expr {
        Expression::IntegerLiteral(..)
        | Expression::FloatLiteral(..)
        | Expression::StringLiteral(..)
        | Expression::BoolLiteral(..)
        | Expression::Identifier(..) => (expr.clone(), false),

        Expression::BinaryOp { op, left, right, pos } => {
            let (l, lc) = rewrite_expr(left, counter);
            let (r, rc) = rewrite_expr(right, counter);
            (
                Expression::BinaryOp { op: *op, left: Box::new(l), right: Box::new(r), pos: *pos },
                lc || rc,
            )
        }

        Expression::UnaryOp { op, operand, pos } => {
            let (o, changed) = rewrite_expr(operand, counter);
            (Expression::UnaryOp { op: *op, operand: Box::new(o), pos: *pos }, changed)
        }

        // The callee is never rewritten, only the arguments.
        Expression::FunctionCall { callee, arguments, pos } => {
            let mut changed = false;
            let arguments = arguments
                .iter()
                .map(|a| {
                    let (a, c) = rewrite_expr(a, counter);
                    changed |= c;
                    a
                })
                .collect();
            (
                Expression::FunctionCall { callee: callee.clone(), arguments, pos: *pos },
                changed,
            )
        }

        Expression::MemberAccess { object, member, pos } => {
            let (o, changed) = rewrite_expr(object, counter);
            (
                Expression::MemberAccess { object: Box::new(o), member: member.clone(), pos: *pos },
                changed,
            )
        }

        Expression::ArrayLiteral { elements, pos } => {
            let mut changed = false;
            let elements = elements
                .iter()
                .map(|e| {
                    let (e, c) = rewrite_expr(e, counter);
                    changed |= c;
                    e
                })
                .collect();
            (Expression::ArrayLiteral { elements, pos: *pos }, changed)
        }

        Expression::RecordLiteral { fields, pos } => {
            let mut changed = false;
            let fields = fields
                .iter()
                .map(|(name, value)| {
                    let (value, c) = rewrite_expr(value, counter);
                    changed |= c;
                    (name.clone(), value)
                })
                .collect();
            (Expression::RecordLiteral { fields, pos: *pos }, changed)
        }

        Expression::When { condition, then_block, else_block, pos } => {
            let (condition, cc) = rewrite_expr(condition, counter);
            let (then_block, tc) = rewrite_block(then_block, counter);
            let (else_block, ec) = match else_block {
                Some(b) => {
                    let (b, c) = rewrite_block(b, counter);
                    (Some(b), c)
                }
                None => (None, false),
            };
            (
                Expression::When { condition: Box::new(condition), then_block, else_block, pos: *pos },
                cc || tc || ec,
            )
        }

        Expression::Given { scrutinee, cases, pos } => {
            let (scrutinee, sc) = rewrite_expr(scrutinee, counter);
            let mut changed = sc;
            let cases = cases
                .iter()
                .map(|case| {
                    let (expression, c) = rewrite_expr(&case.expression, counter);
                    changed |= c;
                    PatternCase { pattern: case.pattern.clone(), expression, pos: case.pos }
                })
                .collect();
            (Expression::Given { scrutinee: Box::new(scrutinee), cases, pos: *pos }, changed)
        }
    };

    match try_simplify_node(&rewritten) {
        Some(simplified) => {
            *counter += 1;
            (simplified, true)
        }
        None => (rewritten, children_changed),
    }
}

pub(crate) fn rewrite_block(block: &Block, counter: &mut usize) -> (Block, bool) {
    let mut changed = false;
    let statements = block
        .statements
        .iter()
        .map(|s| {
            let (s, c) = rewrite_statement(s, counter);
            changed |= c;
            s
        })
        .collect();
    (Block { statements, pos: block.pos }, changed)
}

fn rewrite_statement(stmt: &Statement, counter: &mut usize) -> (Statement, bool) {
    match stmt {
        Statement::Block(b) => {
            let (b, changed) = rewrite_block(b, counter);
            (Statement::Block(b), changed)
        }
        Statement::LetBinding { name, type_annotation, value, pos } => {
            let (value, changed) = rewrite_expr(value, counter);
            (
                Statement::LetBinding {
                    name: name.clone(),
                    type_annotation: type_annotation.clone(),
                    value,
                    pos: *pos,
                },
                changed,
            )
        }
        Statement::Assignment { target, value, pos } => {
            let (value, changed) = rewrite_expr(value, counter);
            (Statement::Assignment { target: target.clone(), value, pos: *pos }, changed)
        }
        Statement::ExpressionStatement { expression, pos } => {
            let (expression, changed) = rewrite_expr(expression, counter);
            (Statement::ExpressionStatement { expression, pos: *pos }, changed)
        }
    }
}
