use crate::error::CodeGenError;
use crate::lower_expr::lower_expr;
use crate::writer::Writer;
use pact_ast::{Expression, TypeDeclaration, TypeDefinition};

pub(crate) fn lower_type_declaration(writer: &mut Writer, decl: &TypeDeclaration) -> Result<(), CodeGenError> {
    match &decl.definition {
        TypeDefinition::Sum(sum) => {
            writer.line(&format!("class {}:", decl.name));
            writer.indent();
            writer.line("pass");
            writer.dedent();
            writer.blank();
            for variant in &sum.variants {
                writer.line(&format!("class {}({}):", variant.name, decl.name));
                writer.indent();
                if variant.parameters.is_empty() {
                    writer.line("pass");
                } else {
                    let params = (0..variant.parameters.len()).map(|i| format!("v{i}")).collect::<Vec<_>>();
                    writer.line(&format!("def __init__(self, {}):", params.join(", ")));
                    writer.indent();
                    for p in &params {
                        writer.line(&format!("self.{p} = {p}"));
                    }
                    writer.dedent();
                }
                writer.dedent();
                writer.blank();
            }
        }
        TypeDefinition::Simple(_) => {
            emit_value_class(writer, &decl.name, &decl.invariants)?;
        }
        TypeDefinition::Refined(refined) => {
            let mut conditions = vec![refined.condition.clone()];
            conditions.extend(decl.invariants.iter().cloned());
            emit_value_class(writer, &decl.name, &conditions)?;
        }
    }
    Ok(())
}

fn emit_value_class(writer: &mut Writer, name: &str, invariants: &[Expression]) -> Result<(), CodeGenError> {
    writer.line(&format!("class {name}:"));
    writer.indent();
    writer.line("def __init__(self, value):");
    writer.indent();
    for invariant in invariants {
        let code = lower_expr(invariant)?;
        let message = format!("Invariant failed: {code}");
        writer.line(&format!("assert {code}, {message:?}"));
    }
    writer.line("self.value = value");
    writer.dedent();
    writer.dedent();
    writer.blank();
    Ok(())
}
