use pact_ast::{Expression, LiteralValue, Pattern};

/// Renders an expression on a single line. `When` and `Given` render only
/// their head here — the full multi-line block form is only reachable at
/// block-statement position, via `crate::block`.
pub(crate) fn format_expr(expr: &Expression) -> String {
    match expr {
        Expression::IntegerLiteral(v, _) => v.to_string(),
        Expression::FloatLiteral(v, _) => format_float(*v),
        Expression::StringLiteral(s, _) => format_string(s),
        Expression::BoolLiteral(b, _) => b.to_string(),
        Expression::Identifier(name, _) => name.clone(),
        Expression::BinaryOp { op, left, right, .. } => {
            format!("{} {} {}", format_expr(left), op.as_str(), format_expr(right))
        }
        Expression::UnaryOp { op, operand, .. } => format!("{}{}", op.as_str(), format_expr(operand)),
        Expression::FunctionCall { callee, arguments, .. } => {
            let args = arguments.iter().map(format_expr).collect::<Vec<_>>().join(", ");
            format!("{}({args})", format_expr(callee))
        }
        Expression::MemberAccess { object, member, .. } => format!("{}.{member}", format_expr(object)),
        Expression::ArrayLiteral { elements, .. } => {
            let elems = elements.iter().map(format_expr).collect::<Vec<_>>().join(", ");
            format!("[{elems}]")
        }
        Expression::RecordLiteral { fields, .. } => {
            let fields = fields
                .iter()
                .map(|(name, value)| format!("{name}: {}", format_expr(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {fields} }}")
        }
        Expression::When { condition, else_block, .. } => {
            let mut head = format!("when {}", format_expr(condition));
            if else_block.is_some() {
                head.push_str(" otherwise");
            }
            head
        }
        Expression::Given { scrutinee, .. } => format!("given {}", format_expr(scrutinee)),
    }
}

fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

fn format_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

pub(crate) fn format_pattern(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Constructor { name, parameters, .. } => {
            if parameters.is_empty() {
                name.clone()
            } else {
                let params = parameters.iter().map(format_pattern).collect::<Vec<_>>().join(", ");
                format!("{name}({params})")
            }
        }
        Pattern::Identifier(name, _) => name.clone(),
        Pattern::Literal(lit, _) => format_literal(lit),
        Pattern::Wildcard(_) => "_".to_string(),
    }
}

fn format_literal(lit: &LiteralValue) -> String {
    match lit {
        LiteralValue::Int(v) => v.to_string(),
        LiteralValue::Float(v) => format_float(*v),
        LiteralValue::Str(s) => format_string(s),
        LiteralValue::Bool(b) => b.to_string(),
    }
}
