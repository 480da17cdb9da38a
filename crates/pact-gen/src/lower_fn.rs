use crate::error::CodeGenError;
use crate::lower_expr::lower_expr;
use crate::lower_stmt::lower_statement;
use crate::writer::Writer;
use pact_ast::{Block, FunctionDeclaration, Statement};

pub(crate) fn lower_function(writer: &mut Writer, f: &FunctionDeclaration) -> Result<(), CodeGenError> {
    let params = f.parameters.iter().map(|p| p.name.clone()).collect::<Vec<_>>().join(", ");
    writer.line(&format!("def {}({params}):", f.name));
    writer.indent();

    for precondition in &f.preconditions {
        assert_contract(writer, precondition, "Precondition")?;
    }

    let has_result = lower_body(writer, &f.body)?;

    for postcondition in &f.postconditions {
        assert_contract(writer, postcondition, "Postcondition")?;
    }

    // The `result` binding from the body's trailing expression must stay in
    // scope through the postcondition asserts above, so `return` is emitted
    // last rather than immediately after the assignment.
    if has_result {
        writer.line("return result");
    }

    writer.dedent();
    writer.blank();
    Ok(())
}

fn assert_contract(
    writer: &mut Writer,
    contract: &pact_ast::Expression,
    label: &str,
) -> Result<(), CodeGenError> {
    let code = lower_expr(contract)?;
    writer.line(&format!("# {}", label.to_lowercase()));
    let message = format!("{label} failed: {code}");
    writer.line(&format!("assert {code}, {message:?}"));
    Ok(())
}

/// Lowers the function body. The last statement, if an `ExpressionStatement`,
/// binds `result` instead of returning directly — the `return` is deferred
/// to the caller so postcondition asserts can run first. Returns whether a
/// `result` binding was produced.
fn lower_body(writer: &mut Writer, block: &Block) -> Result<bool, CodeGenError> {
    if block.statements.is_empty() {
        writer.line("pass");
        return Ok(false);
    }

    let last = block.statements.len() - 1;
    for (i, stmt) in block.statements.iter().enumerate() {
        if i == last {
            if let Statement::ExpressionStatement { expression, .. } = stmt {
                let code = lower_expr(expression)?;
                writer.line(&format!("result = {code}"));
                return Ok(true);
            }
        }
        lower_statement(writer, stmt)?;
    }
    Ok(false)
}
