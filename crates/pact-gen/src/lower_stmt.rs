use crate::error::CodeGenError;
use crate::lower_expr::lower_expr;
use crate::writer::Writer;
use pact_ast::{Block, Expression, Statement};

/// Lowers a nested block's statements in place — "no new scope", so this is
/// just each statement emitted at the current indent level.
pub(crate) fn lower_nested_block(writer: &mut Writer, block: &Block) -> Result<(), CodeGenError> {
    if block.statements.is_empty() {
        writer.line("pass");
        return Ok(());
    }
    for stmt in &block.statements {
        lower_statement(writer, stmt)?;
    }
    Ok(())
}

pub(crate) fn lower_statement(writer: &mut Writer, stmt: &Statement) -> Result<(), CodeGenError> {
    match stmt {
        Statement::Block(b) => lower_nested_block(writer, b),
        Statement::LetBinding { name, value, .. } => {
            let code = lower_expr(value)?;
            writer.line(&format!("{name} = {code}"));
            Ok(())
        }
        Statement::Assignment { target, value, .. } => {
            let code = lower_expr(value)?;
            writer.line(&format!("{target} = {code}"));
            Ok(())
        }
        Statement::ExpressionStatement { expression, .. } => lower_expr_statement(writer, expression),
    }
}

/// A non-last `ExpressionStatement`. A bare `when` lowers as a statement-
/// level `if`/`else` rather than the conditional-expression form `lower_expr`
/// would otherwise produce, so its branches can hold arbitrary statements.
fn lower_expr_statement(writer: &mut Writer, expr: &Expression) -> Result<(), CodeGenError> {
    match expr {
        Expression::When { condition, then_block, else_block, .. } => {
            let cond = lower_expr(condition)?;
            writer.line(&format!("if {cond}:"));
            writer.indent();
            lower_nested_block(writer, then_block)?;
            writer.dedent();
            if let Some(else_block) = else_block {
                writer.line("else:");
                writer.indent();
                lower_nested_block(writer, else_block)?;
                writer.dedent();
            }
            Ok(())
        }
        other => {
            let code = lower_expr(other)?;
            writer.line(&code);
            Ok(())
        }
    }
}
