use pact_ast::Expression;

/// Shallow structural equality: same leaf kind and matching value/name.
/// Two `BinaryOp` nodes (or any other composite) are never considered equal
/// here, even when every leaf underneath matches — the check does not
/// recurse into operators, only into leaf comparisons.
pub(crate) fn structurally_equal(a: &Expression, b: &Expression) -> bool {
    match (a, b) {
        (Expression::IntegerLiteral(x, _), Expression::IntegerLiteral(y, _)) => x == y,
        (Expression::FloatLiteral(x, _), Expression::FloatLiteral(y, _)) => x == y,
        (Expression::StringLiteral(x, _), Expression::StringLiteral(y, _)) => x == y,
        (Expression::BoolLiteral(x, _), Expression::BoolLiteral(y, _)) => x == y,
        (Expression::Identifier(x, _), Expression::Identifier(y, _)) => x == y,
        _ => false,
    }
}
