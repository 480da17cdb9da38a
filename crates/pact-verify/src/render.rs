use pact_ast::Expression;

/// A compact, non-canonical rendering of an expression for diagnostic
/// messages. Not the formatter — `pact-fmt` owns canonical source text.
pub(crate) fn describe(expr: &Expression) -> String {
    match expr {
        Expression::IntegerLiteral(v, _) => v.to_string(),
        Expression::FloatLiteral(v, _) => v.to_string(),
        Expression::StringLiteral(v, _) => format!("\"{v}\""),
        Expression::BoolLiteral(v, _) => v.to_string(),
        Expression::Identifier(name, _) => name.clone(),
        Expression::BinaryOp { op, left, right, .. } => {
            format!("{} {} {}", describe(left), op.as_str(), describe(right))
        }
        Expression::UnaryOp { op, operand, .. } => format!("{}{}", op.as_str(), describe(operand)),
        Expression::FunctionCall { callee, arguments, .. } => {
            let args = arguments.iter().map(describe).collect::<Vec<_>>().join(", ");
            format!("{}({args})", describe(callee))
        }
        Expression::MemberAccess { object, member, .. } => format!("{}.{member}", describe(object)),
        Expression::ArrayLiteral { elements, .. } => {
            format!("[{}]", elements.iter().map(describe).collect::<Vec<_>>().join(", "))
        }
        Expression::RecordLiteral { fields, .. } => {
            let rendered = fields
                .iter()
                .map(|(name, value)| format!("{name}: {}", describe(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {rendered} }}")
        }
        Expression::When { .. } => "when ...".to_string(),
        Expression::Given { .. } => "given ...".to_string(),
    }
}
