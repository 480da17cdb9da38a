use crate::block::format_block;
use crate::expr::format_expr;
use crate::ty::format_type;
use crate::writer::indent;
use pact_ast::{FunctionDeclaration, TypeDeclaration, TypeDefinition};

pub(crate) fn format_type_declaration(decl: &TypeDeclaration) -> Vec<String> {
    let mut header = format!("type {}", decl.name);
    if !decl.type_params.is_empty() {
        header.push('[');
        header.push_str(&decl.type_params.join(", "));
        header.push(']');
    }

    let mut lines = Vec::new();
    let mut invariants = decl.invariants.clone();

    match &decl.definition {
        TypeDefinition::Simple(simple) => {
            header.push_str(" = ");
            header.push_str(&simple.name);
            if !simple.type_args.is_empty() {
                let args = simple.type_args.iter().map(format_type).collect::<Vec<_>>().join(", ");
                header.push('[');
                header.push_str(&args);
                header.push(']');
            }
            lines.push(header);
        }
        TypeDefinition::Sum(sum) => {
            header.push_str(" =");
            lines.push(header);
            for variant in &sum.variants {
                let mut line = format!("{}| {}", indent(1), variant.name);
                if !variant.parameters.is_empty() {
                    let params = variant.parameters.iter().map(format_type).collect::<Vec<_>>().join(", ");
                    line.push('(');
                    line.push_str(&params);
                    line.push(')');
                }
                lines.push(line);
            }
        }
        TypeDefinition::Refined(refined) => {
            header.push_str(" = ");
            header.push_str(&format_type(&refined.base));
            lines.push(header);
            // `RefinedType` is never produced by the parser directly — it is
            // the model's way of letting a later pass attach a base-type
            // condition. Re-expressed here as an ordinary invariant, which
            // is the only surface syntax that can carry it.
            invariants.insert(0, refined.condition.clone());
        }
    }

    for invariant in &invariants {
        lines.push(format!("{}invariant {}", indent(1), format_expr(invariant)));
    }

    lines
}

pub(crate) fn format_function_declaration(decl: &FunctionDeclaration) -> Vec<String> {
    let params = decl
        .parameters
        .iter()
        .map(|p| format!("{}: {}", p.name, format_type(&p.type_annotation)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![format!(
        "define {}({params}) -> {}",
        decl.name,
        format_type(&decl.return_type)
    )];

    for precondition in &decl.preconditions {
        lines.push(format!("{}expect {}", indent(1), format_expr(precondition)));
    }
    for postcondition in &decl.postconditions {
        lines.push(format!("{}ensure {}", indent(1), format_expr(postcondition)));
    }

    lines.push("given".to_string());
    lines.extend(format_block(&decl.body, 1));

    lines
}
