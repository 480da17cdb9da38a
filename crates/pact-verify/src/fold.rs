use pact_ast::{BinOp, Expression, UnOp};

/// A folded numeric constant, keeping the `Int`/`Float` distinction so that
/// `Int / Int` can use truncating division — Rust's native `/`, the
/// verifier's own rule, deliberately different from the optimizer's
/// exact-or-float reclassification (see `pact-opt`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum NumValue {
    Int(i64),
    Float(f64),
}

impl NumValue {
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            NumValue::Int(v) => v as f64,
            NumValue::Float(v) => v,
        }
    }
}

/// Reduces a closed-form (variable-free) numeric expression to a value.
/// Returns `None` the moment it meets anything that depends on state it
/// cannot resolve — an identifier, a call, division or modulus by zero.
pub(crate) fn fold_numeric(expr: &Expression) -> Option<NumValue> {
    match expr {
        Expression::IntegerLiteral(v, _) => Some(NumValue::Int(*v)),
        Expression::FloatLiteral(v, _) => Some(NumValue::Float(*v)),
        Expression::UnaryOp { op: UnOp::Neg, operand, .. } => match fold_numeric(operand)? {
            NumValue::Int(v) => Some(NumValue::Int(v.wrapping_neg())),
            NumValue::Float(v) => Some(NumValue::Float(-v)),
        },
        Expression::BinaryOp { op, left, right, .. }
            if matches!(op, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod) =>
        {
            let l = fold_numeric(left)?;
            let r = fold_numeric(right)?;
            fold_arith(*op, l, r)
        }
        _ => None,
    }
}

fn fold_arith(op: BinOp, l: NumValue, r: NumValue) -> Option<NumValue> {
    use NumValue::{Float, Int};
    match (l, r) {
        (Int(a), Int(b)) => match op {
            BinOp::Add => Some(Int(a.wrapping_add(b))),
            BinOp::Sub => Some(Int(a.wrapping_sub(b))),
            BinOp::Mul => Some(Int(a.wrapping_mul(b))),
            BinOp::Div => {
                if b == 0 {
                    None
                } else {
                    Some(Int(a / b))
                }
            }
            BinOp::Mod => {
                if b == 0 {
                    None
                } else {
                    Some(Int(a.wrapping_rem(b)))
                }
            }
            _ => None,
        },
        (a, b) => {
            let a = a.as_f64();
            let b = b.as_f64();
            match op {
                BinOp::Add => Some(Float(a + b)),
                BinOp::Sub => Some(Float(a - b)),
                BinOp::Mul => Some(Float(a * b)),
                BinOp::Div => {
                    if b == 0.0 {
                        None
                    } else {
                        Some(Float(a / b))
                    }
                }
                BinOp::Mod => None,
                _ => None,
            }
        }
    }
}

/// Folds a closed-form boolean expression: literals, `!`, `&&`/`||` over
/// already-foldable operands, and comparisons/equality between two
/// closed-form numeric operands.
pub(crate) fn fold_bool(expr: &Expression) -> Option<bool> {
    match expr {
        Expression::BoolLiteral(v, _) => Some(*v),
        Expression::UnaryOp { op: UnOp::Not, operand, .. } => fold_bool(operand).map(|v| !v),
        Expression::BinaryOp { op: BinOp::And, left, right, .. } => {
            Some(fold_bool(left)? && fold_bool(right)?)
        }
        Expression::BinaryOp { op: BinOp::Or, left, right, .. } => {
            Some(fold_bool(left)? || fold_bool(right)?)
        }
        Expression::BinaryOp { op, left, right, .. }
            if matches!(op, BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge) =>
        {
            let l = fold_numeric(left)?.as_f64();
            let r = fold_numeric(right)?.as_f64();
            Some(compare(*op, l, r))
        }
        _ => None,
    }
}

pub(crate) fn compare(op: BinOp, a: f64, b: f64) -> bool {
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
