use crate::fold::fold_numeric;
use pact_ast::{BinOp, Expression};

/// A single symbolic fact `var OP constant`, `OP` restricted to the five
/// comparison/equality operators the implication table understands.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Bound {
    pub var: String,
    pub op: BinOp,
    pub constant: f64,
}

pub(crate) fn flip_op(op: BinOp) -> BinOp {
    match op {
        BinOp::Lt => BinOp::Gt,
        BinOp::Gt => BinOp::Lt,
        BinOp::Le => BinOp::Ge,
        BinOp::Ge => BinOp::Le,
        other => other,
    }
}

/// Walks `&&` and collects one `Bound` per `identifier OP literal` (or
/// `literal OP identifier`, normalized by flipping the operator) leaf.
/// Growing the list is the only effect a contract has on later checks.
pub(crate) fn extract_bounds(expr: &Expression) -> Vec<Bound> {
    match expr {
        Expression::BinaryOp { op: BinOp::And, left, right, .. } => {
            let mut bounds = extract_bounds(left);
            bounds.extend(extract_bounds(right));
            bounds
        }
        Expression::BinaryOp { op, left, right, .. }
            if matches!(op, BinOp::Ge | BinOp::Gt | BinOp::Le | BinOp::Lt | BinOp::Eq) =>
        {
            if let (Expression::Identifier(name, _), Some(value)) = (left.as_ref(), fold_numeric(right)) {
                vec![Bound { var: name.clone(), op: *op, constant: value.as_f64() }]
            } else if let (Some(value), Expression::Identifier(name, _)) = (fold_numeric(left), right.as_ref()) {
                vec![Bound { var: name.clone(), op: flip_op(*op), constant: value.as_f64() }]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}
