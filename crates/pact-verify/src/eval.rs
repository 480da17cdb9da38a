use crate::bounds::{flip_op, Bound};
use crate::fold::{compare, fold_bool, fold_numeric};
use crate::implication::implies;
use crate::structural::structurally_equal;
use crate::tri::Tri;
use pact_ast::{BinOp, Expression, UnOp};

/// Decides the truth of `expr` under the given assumption set, applying the
/// evaluation passes in order: constant folding, structural equality
/// (reflexivity), bound lookup, additive-shape reduction, and tri-valued
/// logical connectives. Anything left over is `Unknown` — this function
/// never guesses.
pub(crate) fn evaluate(expr: &Expression, bounds: &[Bound]) -> Tri {
    if let Some(value) = fold_bool(expr) {
        return Tri::from_bool(value);
    }

    match expr {
        Expression::UnaryOp { op: UnOp::Not, operand, .. } => evaluate(operand, bounds).not(),
        Expression::BinaryOp { op: BinOp::And, left, right, .. } => {
            evaluate(left, bounds).and(evaluate(right, bounds))
        }
        Expression::BinaryOp { op: BinOp::Or, left, right, .. } => {
            evaluate(left, bounds).or(evaluate(right, bounds))
        }
        Expression::BinaryOp { op, left, right, pos }
            if matches!(op, BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge) =>
        {
            evaluate_comparison(*op, left, right, *pos, bounds)
        }
        _ => Tri::Unknown,
    }
}

fn evaluate_comparison(
    op: BinOp,
    left: &Expression,
    right: &Expression,
    pos: pact_util::Pos,
    bounds: &[Bound],
) -> Tri {
    if let (Some(l), Some(r)) = (fold_numeric(left), fold_numeric(right)) {
        return Tri::from_bool(compare(op, l.as_f64(), r.as_f64()));
    }

    if structurally_equal(left, right) {
        return match op {
            BinOp::Ge | BinOp::Le | BinOp::Eq => Tri::True,
            _ => Tri::False,
        };
    }

    if let Expression::Identifier(name, _) = left {
        if let Some(q) = fold_numeric(right) {
            let result = lookup(name, op, q.as_f64(), bounds);
            if result != Tri::Unknown {
                return result;
            }
        }
    } else if let Expression::Identifier(name, _) = right {
        if let Some(k) = fold_numeric(left) {
            let result = lookup(name, flip_op(op), k.as_f64(), bounds);
            if result != Tri::Unknown {
                return result;
            }
        }
    }

    if let Some(result) = additive_shape(op, left, right, pos, bounds) {
        return result;
    }

    Tri::Unknown
}

fn lookup(var: &str, query_op: BinOp, q: f64, bounds: &[Bound]) -> Tri {
    for bound in bounds.iter().filter(|b| b.var == var) {
        let result = implies(bound.op, bound.constant, query_op, q);
        if result != Tri::Unknown {
            return result;
        }
    }
    Tri::Unknown
}

/// `(a + b) ⊕ a` or `a ⊕ (a + b)` reduces to `b ⊕ 0`.
fn additive_shape(
    op: BinOp,
    left: &Expression,
    right: &Expression,
    pos: pact_util::Pos,
    bounds: &[Bound],
) -> Option<Tri> {
    if let Expression::BinaryOp { op: BinOp::Add, left: inner_l, right: inner_r, .. } = left {
        if structurally_equal(inner_r, right) {
            return Some(evaluate(&zero_compare(op, inner_l, pos), bounds));
        }
        if structurally_equal(inner_l, right) {
            return Some(evaluate(&zero_compare(op, inner_r, pos), bounds));
        }
    }
    if let Expression::BinaryOp { op: BinOp::Add, left: inner_l, right: inner_r, .. } = right {
        if structurally_equal(inner_r, left) {
            return Some(evaluate(&zero_compare(op, inner_l, pos), bounds));
        }
        if structurally_equal(inner_l, left) {
            return Some(evaluate(&zero_compare(op, inner_r, pos), bounds));
        }
    }
    None
}

fn zero_compare(op: BinOp, operand: &Expression, pos: pact_util::Pos) -> Expression {
    Expression::BinaryOp {
        op,
        left: Box::new(operand.clone()),
        right: Box::new(Expression::IntegerLiteral(0, pos)),
        pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Expression {
        Expression::Identifier(name.to_string(), pact_util::Pos::new(1, 1))
    }

    fn int(v: i64) -> Expression {
        Expression::IntegerLiteral(v, pact_util::Pos::new(1, 1))
    }

    fn cmp(op: BinOp, left: Expression, right: Expression) -> Expression {
        Expression::BinaryOp { op, left: Box::new(left), right: Box::new(right), pos: pact_util::Pos::new(1, 1) }
    }

    #[test]
    fn reflexivity_proves_ge() {
        let expr = cmp(BinOp::Ge, id("x"), id("x"));
        assert_eq!(evaluate(&expr, &[]), Tri::True);
    }

    #[test]
    fn reflexivity_refutes_lt() {
        let expr = cmp(BinOp::Lt, id("x"), id("x"));
        assert_eq!(evaluate(&expr, &[]), Tri::False);
    }

    #[test]
    fn bound_proves_looser_comparison() {
        let bounds = vec![Bound { var: "x".to_string(), op: BinOp::Ge, constant: 5.0 }];
        let expr = cmp(BinOp::Ge, id("x"), int(3));
        assert_eq!(evaluate(&expr, &bounds), Tri::True);
    }

    #[test]
    fn no_bound_is_unknown() {
        let expr = cmp(BinOp::Ge, id("x"), int(3));
        assert_eq!(evaluate(&expr, &[]), Tri::Unknown);
    }

    #[test]
    fn additive_shape_reduces() {
        let bounds = vec![Bound { var: "y".to_string(), op: BinOp::Ge, constant: 0.0 }];
        let expr = cmp(BinOp::Ge, cmp(BinOp::Add, id("x"), id("y")), id("x"));
        assert_eq!(evaluate(&expr, &bounds), Tri::True);
    }

    #[test]
    fn constant_division_by_zero_is_unknown_not_a_panic() {
        let expr = cmp(BinOp::Eq, cmp(BinOp::Div, int(1), int(0)), int(1));
        assert_eq!(evaluate(&expr, &[]), Tri::Unknown);
    }
}
