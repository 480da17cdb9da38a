use crate::expr::format_expr;
use crate::expr::format_pattern;
use crate::writer::indent;
use pact_ast::{Block, Expression, Statement};

/// Renders a block at `level`, one line (or nested block) per statement.
/// A `when`/`given` trailing expression renders in full multi-line form
/// here; everywhere else `format_expr`'s single-line head is used instead.
pub(crate) fn format_block(block: &Block, level: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for stmt in &block.statements {
        lines.extend(format_statement(stmt, level));
    }
    lines
}

fn format_statement(stmt: &Statement, level: usize) -> Vec<String> {
    match stmt {
        Statement::ExpressionStatement { expression, .. } => match expression {
            Expression::When { .. } => format_when_block(expression, level),
            Expression::Given { .. } => format_given_block(expression, level),
            _ => vec![format!("{}{}", indent(level), format_expr(expression))],
        },
        Statement::Block(inner) => format_block(inner, level),
        Statement::LetBinding { name, type_annotation, value, .. } => {
            let ty = type_annotation
                .as_ref()
                .map(|t| format!(": {}", crate::ty::format_type(t)))
                .unwrap_or_default();
            vec![format!("{}let {name}{ty} = {}", indent(level), format_expr(value))]
        }
        Statement::Assignment { target, value, .. } => {
            vec![format!("{}{target} = {}", indent(level), format_expr(value))]
        }
    }
}

fn format_when_block(expr: &Expression, level: usize) -> Vec<String> {
    let Expression::When { condition, then_block, else_block, .. } = expr else {
        unreachable!()
    };
    let mut lines = vec![format!("{}when {}", indent(level), format_expr(condition))];
    lines.extend(format_block(then_block, level + 1));
    if let Some(else_block) = else_block {
        lines.push(format!("{}otherwise", indent(level)));
        lines.extend(format_block(else_block, level + 1));
    }
    lines
}

fn format_given_block(expr: &Expression, level: usize) -> Vec<String> {
    let Expression::Given { scrutinee, cases, .. } = expr else {
        unreachable!()
    };
    let mut lines = vec![format!("{}given {}", indent(level), format_expr(scrutinee))];
    for case in cases {
        lines.push(format!(
            "{}{} -> {}",
            indent(level + 1),
            format_pattern(&case.pattern),
            format_expr(&case.expression)
        ));
    }
    lines
}
