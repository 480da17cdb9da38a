use crate::error::CodeGenError;
use pact_ast::{BinOp, Expression, LiteralValue, Pattern, UnOp};

/// Lowers an expression to a single target-language expression string.
/// The only failure mode is a `when`/`given` block whose block body has no
/// trailing expression to stand in for — everything else in the closed
/// `Expression` family has a direct 1-to-1 rendering.
pub(crate) fn lower_expr(expr: &Expression) -> Result<String, CodeGenError> {
    match expr {
        Expression::IntegerLiteral(v, _) => Ok(v.to_string()),
        Expression::FloatLiteral(v, _) => Ok(render_float(*v)),
        Expression::StringLiteral(v, _) => Ok(format!("{v:?}")),
        Expression::BoolLiteral(v, _) => Ok(if *v { "True".to_string() } else { "False".to_string() }),
        Expression::Identifier(name, _) => Ok(name.clone()),

        Expression::BinaryOp { op, left, right, .. } => {
            let l = lower_expr(left)?;
            let r = lower_expr(right)?;
            Ok(format!("({l} {} {r})", lower_binop(*op)))
        }

        Expression::UnaryOp { op, operand, .. } => {
            let o = lower_expr(operand)?;
            Ok(match op {
                UnOp::Not => format!("(not {o})"),
                UnOp::Neg => format!("(-{o})"),
            })
        }

        Expression::FunctionCall { callee, arguments, .. } => {
            let callee = lower_expr(callee)?;
            let args = arguments.iter().map(lower_expr).collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{callee}({})", args.join(", ")))
        }

        Expression::MemberAccess { object, member, .. } => {
            let object = lower_expr(object)?;
            Ok(format!("{object}.{member}"))
        }

        Expression::ArrayLiteral { elements, .. } => {
            let elements = elements.iter().map(lower_expr).collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", elements.join(", ")))
        }

        Expression::RecordLiteral { fields, .. } => {
            let fields = fields
                .iter()
                .map(|(name, value)| Ok(format!("{name:?}: {}", lower_expr(value)?)))
                .collect::<Result<Vec<_>, CodeGenError>>()?;
            Ok(format!("{{{}}}", fields.join(", ")))
        }

        Expression::When { condition, then_block, else_block, pos } => {
            let cond = lower_expr(condition)?;
            let then_expr = then_block.trailing_expression().ok_or_else(|| CodeGenError::UnsupportedNode {
                kind: "when-block with no trailing expression".to_string(),
                pos: *pos,
            })?;
            let then_code = lower_expr(then_expr)?;
            let else_code = match else_block {
                Some(block) => {
                    let expr = block.trailing_expression().ok_or_else(|| CodeGenError::UnsupportedNode {
                        kind: "otherwise-block with no trailing expression".to_string(),
                        pos: *pos,
                    })?;
                    lower_expr(expr)?
                }
                None => "None".to_string(),
            };
            Ok(format!("({then_code} if {cond} else {else_code})"))
        }

        Expression::Given { scrutinee, cases, .. } => {
            let scrutinee_code = lower_expr(scrutinee)?;
            let mut body = "None".to_string();
            for case in cases.iter().rev() {
                let cond = lower_pattern_cond(&case.pattern, "_g");
                let value = lower_expr(&case.expression)?;
                body = format!("({value} if {cond} else {body})");
            }
            Ok(format!("(lambda _g: {body})({scrutinee_code})"))
        }
    }
}

fn render_float(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

fn lower_binop(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "//",
        BinOp::Mod => "%",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::Le => "<=",
        BinOp::Ge => ">=",
        BinOp::And => "and",
        BinOp::Or => "or",
    }
}

fn lower_pattern_cond(pattern: &Pattern, scrutinee_var: &str) -> String {
    match pattern {
        Pattern::Constructor { name, .. } => format!("isinstance({scrutinee_var}, {name})"),
        Pattern::Identifier(..) | Pattern::Wildcard(_) => "True".to_string(),
        Pattern::Literal(literal, _) => format!("{scrutinee_var} == {}", lower_literal(literal)),
    }
}

fn lower_literal(literal: &LiteralValue) -> String {
    match literal {
        LiteralValue::Int(v) => v.to_string(),
        LiteralValue::Float(v) => render_float(*v),
        LiteralValue::Str(v) => format!("{v:?}"),
        LiteralValue::Bool(v) => if *v { "True".to_string() } else { "False".to_string() },
    }
}
