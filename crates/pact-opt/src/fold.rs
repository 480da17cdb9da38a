//! Node-level simplification rules. Each `try_*` function looks only at the
//! node handed to it — callers are responsible for rewriting children first,
//! so these never recurse.

use pact_ast::{BinOp, Block, Expression, Statement, UnOp};
use pact_util::Pos;

/// Tries constant folding, then falls back to identity simplification.
/// Unary and `when` nodes have their own dispatch, this one is only for
/// `BinaryOp`.
pub(crate) fn try_simplify_node(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::BinaryOp { op, left, right, pos } => {
            try_fold_binary(*op, left, right, *pos).or_else(|| try_identity_binary(*op, left, right, *pos))
        }
        Expression::UnaryOp { op, operand, pos } => try_fold_unary(*op, operand, *pos),
        Expression::When { condition, then_block, else_block, pos } => {
            try_simplify_when(condition, then_block, else_block, *pos)
        }
        _ => None,
    }
}

fn try_fold_binary(op: BinOp, left: &Expression, right: &Expression, pos: Pos) -> Option<Expression> {
    match (left, right) {
        (Expression::IntegerLiteral(lv, _), Expression::IntegerLiteral(rv, _)) => fold_int_int(op, *lv, *rv, pos),
        (Expression::FloatLiteral(lv, _), Expression::FloatLiteral(rv, _)) => fold_float_float(op, *lv, *rv, pos),
        (Expression::IntegerLiteral(lv, _), Expression::FloatLiteral(rv, _)) => {
            fold_float_float(op, *lv as f64, *rv, pos)
        }
        (Expression::FloatLiteral(lv, _), Expression::IntegerLiteral(rv, _)) => {
            fold_float_float(op, *lv, *rv as f64, pos)
        }
        (Expression::BoolLiteral(lv, _), Expression::BoolLiteral(rv, _)) => fold_bool_bool(op, *lv, *rv, pos),
        (Expression::StringLiteral(lv, _), Expression::StringLiteral(rv, _)) if op == BinOp::Add => {
            Some(Expression::StringLiteral(format!("{lv}{rv}"), pos))
        }
        _ => None,
    }
}

fn fold_int_int(op: BinOp, lv: i64, rv: i64, pos: Pos) -> Option<Expression> {
    match op {
        BinOp::Add => Some(Expression::IntegerLiteral(lv.wrapping_add(rv), pos)),
        BinOp::Sub => Some(Expression::IntegerLiteral(lv.wrapping_sub(rv), pos)),
        BinOp::Mul => Some(Expression::IntegerLiteral(lv.wrapping_mul(rv), pos)),
        BinOp::Mod => {
            if rv == 0 {
                None
            } else {
                Some(Expression::IntegerLiteral(lv.wrapping_rem(rv), pos))
            }
        }
        BinOp::Div => {
            if rv == 0 {
                None
            } else {
                let q = lv as f64 / rv as f64;
                if q == q.trunc() {
                    Some(Expression::IntegerLiteral(q as i64, pos))
                } else {
                    Some(Expression::FloatLiteral(q, pos))
                }
            }
        }
        BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge | BinOp::Eq | BinOp::Ne => {
            Some(Expression::BoolLiteral(compare(op, lv as f64, rv as f64), pos))
        }
        BinOp::And | BinOp::Or => None,
    }
}

fn fold_float_float(op: BinOp, lv: f64, rv: f64, pos: Pos) -> Option<Expression> {
    match op {
        BinOp::Add => Some(Expression::FloatLiteral(lv + rv, pos)),
        BinOp::Sub => Some(Expression::FloatLiteral(lv - rv, pos)),
        BinOp::Mul => Some(Expression::FloatLiteral(lv * rv, pos)),
        BinOp::Div => {
            if rv == 0.0 {
                None
            } else {
                Some(Expression::FloatLiteral(lv / rv, pos))
            }
        }
        BinOp::Mod => None,
        BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge | BinOp::Eq | BinOp::Ne => {
            Some(Expression::BoolLiteral(compare(op, lv, rv), pos))
        }
        BinOp::And | BinOp::Or => None,
    }
}

fn fold_bool_bool(op: BinOp, lv: bool, rv: bool, pos: Pos) -> Option<Expression> {
    match op {
        BinOp::And => Some(Expression::BoolLiteral(lv && rv, pos)),
        BinOp::Or => Some(Expression::BoolLiteral(lv || rv, pos)),
        BinOp::Eq => Some(Expression::BoolLiteral(lv == rv, pos)),
        BinOp::Ne => Some(Expression::BoolLiteral(lv != rv, pos)),
        _ => None,
    }
}

fn compare(op: BinOp, a: f64, b: f64) -> bool {
    match op {
        BinOp::Lt => a < b,
        BinOp::Gt => a > b,
        BinOp::Le => a <= b,
        BinOp::Ge => a >= b,
        BinOp::Eq => a == b,
        BinOp::Ne => a != b,
        _ => unreachable!("compare is only called with comparison/equality operators"),
    }
}

fn try_identity_binary(op: BinOp, left: &Expression, right: &Expression, pos: Pos) -> Option<Expression> {
    match op {
        BinOp::Add => {
            if is_int_zero(right) {
                Some(left.clone())
            } else if is_int_zero(left) {
                Some(right.clone())
            } else {
                None
            }
        }
        BinOp::Sub => {
            if is_int_zero(right) {
                Some(left.clone())
            } else {
                None
            }
        }
        BinOp::Mul => {
            if is_int_one(right) {
                Some(left.clone())
            } else if is_int_one(left) {
                Some(right.clone())
            } else if is_int_zero(right) || is_int_zero(left) {
                Some(Expression::IntegerLiteral(0, pos))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_int_zero(expr: &Expression) -> bool {
    matches!(expr, Expression::IntegerLiteral(0, _))
}

fn is_int_one(expr: &Expression) -> bool {
    matches!(expr, Expression::IntegerLiteral(1, _))
}

fn try_fold_unary(op: UnOp, operand: &Expression, pos: Pos) -> Option<Expression> {
    match (op, operand) {
        (UnOp::Neg, Expression::IntegerLiteral(v, _)) => Some(Expression::IntegerLiteral(v.wrapping_neg(), pos)),
        (UnOp::Neg, Expression::FloatLiteral(v, _)) => Some(Expression::FloatLiteral(-v, pos)),
        (UnOp::Not, Expression::BoolLiteral(v, _)) => Some(Expression::BoolLiteral(!v, pos)),
        (UnOp::Not, Expression::UnaryOp { op: UnOp::Not, operand: inner, .. }) => Some((**inner).clone()),
        _ => None,
    }
}

fn try_simplify_when(
    condition: &Expression,
    then_block: &Block,
    else_block: &Option<Block>,
    pos: Pos,
) -> Option<Expression> {
    match condition {
        Expression::BoolLiteral(true, _) => single_trailing(then_block),
        Expression::BoolLiteral(false, _) => match else_block {
            Some(block) => single_trailing(block),
            None => Some(Expression::IntegerLiteral(0, pos)),
        },
        _ => None,
    }
}

fn single_trailing(block: &Block) -> Option<Expression> {
    if block.statements.len() != 1 {
        return None;
    }
    match &block.statements[0] {
        Statement::ExpressionStatement { expression, .. } => Some(expression.clone()),
        _ => None,
    }
}
