//! The type checker: `Program` in, an ordered list of positioned
//! [`TypeCheckError`]s out. Unlike the lexer and parser, this pass never
//! fails fast — it always walks the entire program so the caller sees every
//! diagnostic in one run, matching the teacher's `faxc-sem` accumulating
//! analyzer rather than the lexer/parser's fail-on-first-error style.

mod env;
mod error;
mod infer;

pub use env::{compatible, type_to_string, FunctionSignature, TypeEnvironment, TypeStr};
pub use error::TypeCheckError;

use env::simple_type_to_string;
use infer::{infer_block, infer_expr};
use pact_ast::{Declaration, Program, TypeDeclaration, TypeDefinition};

/// Type-checks an entire program and returns every diagnostic found.
/// An empty result means the program is well-typed.
pub fn check_program(program: &Program) -> Vec<TypeCheckError> {
    let mut errors = Vec::new();
    let mut env = TypeEnvironment::new();

    for decl in &program.declarations {
        if let Declaration::Type(type_decl) = decl {
            register_type_declaration(type_decl, &mut env);
        }
    }

    for decl in &program.declarations {
        if let Declaration::Function(f) = decl {
            let parameters = f
                .parameters
                .iter()
                .map(|p| TypeStr::new(type_to_string(&p.type_annotation)))
                .collect();
            let return_type = TypeStr::new(type_to_string(&f.return_type));
            env.functions.insert(
                f.name.clone(),
                FunctionSignature {
                    parameters,
                    return_type: return_type.clone(),
                },
            );
            // The function name is also bound as a value of its own return
            // type, so a sibling body can reference it as a bare identifier
            // before full call-site resolution.
            env.vars.insert(f.name.clone(), return_type);
        }
    }

    for decl in &program.declarations {
        if let Declaration::Type(type_decl) = decl {
            check_type_declaration(type_decl, &env, &mut errors);
        }
    }

    for decl in &program.declarations {
        if let Declaration::Function(f) = decl {
            check_function_declaration(f, &env, &mut errors);
        }
    }

    errors
}

/// A **SimpleType** alias binds `NAME -> <resolved string>`. A **SumType**
/// binds `NAME -> NAME` and every variant `VARIANT -> NAME` (variants carry
/// their sum type). A **RefinedType** binds `NAME -> <base string>`.
fn register_type_declaration(decl: &TypeDeclaration, env: &mut TypeEnvironment) {
    match &decl.definition {
        TypeDefinition::Simple(simple) => {
            env.aliases.insert(decl.name.clone(), simple_type_to_string(simple));
        }
        TypeDefinition::Sum(sum) => {
            env.aliases.insert(decl.name.clone(), decl.name.clone());
            for variant in &sum.variants {
                env.aliases.insert(variant.name.clone(), decl.name.clone());
            }
        }
        TypeDefinition::Refined(refined) => {
            env.aliases
                .insert(decl.name.clone(), type_to_string(&refined.base));
        }
    }
}

/// Every invariant must have inferred type `"Bool"`; in the invariant's
/// environment the name `value` is bound to the alias's resolved string.
fn check_type_declaration(decl: &TypeDeclaration, env: &TypeEnvironment, errors: &mut Vec<TypeCheckError>) {
    let resolved = env
        .aliases
        .get(&decl.name)
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());
    let mut local = env.clone();
    local.vars.insert("value".to_string(), TypeStr::new(resolved));

    for invariant in &decl.invariants {
        let ty = infer_expr(invariant, &local, errors);
        if ty.as_str() != "Bool" && !ty.is_unknown() {
            errors.push(TypeCheckError::NonBoolInvariant {
                found: ty.0,
                pos: invariant.pos(),
            });
        }
    }
}

/// Registers the local environment (global extended by parameters), checks
/// every precondition is `"Bool"`, every postcondition (in the environment
/// further extended by `result`) is `"Bool"`, and that the body's
/// last-expression type is compatible with the declared return type — a
/// mismatch there is reported on the `FunctionDeclaration` node itself.
fn check_function_declaration(
    f: &pact_ast::FunctionDeclaration,
    env: &TypeEnvironment,
    errors: &mut Vec<TypeCheckError>,
) {
    let mut local = env.clone();
    for param in &f.parameters {
        local
            .vars
            .insert(param.name.clone(), TypeStr::new(type_to_string(&param.type_annotation)));
    }

    for precondition in &f.preconditions {
        let ty = infer_expr(precondition, &local, errors);
        if ty.as_str() != "Bool" && !ty.is_unknown() {
            errors.push(TypeCheckError::NonBoolContract {
                found: ty.0,
                pos: precondition.pos(),
            });
        }
    }

    let return_type_str = type_to_string(&f.return_type);
    let mut post_env = local.clone();
    post_env
        .vars
        .insert("result".to_string(), TypeStr::new(return_type_str.clone()));
    for postcondition in &f.postconditions {
        let ty = infer_expr(postcondition, &post_env, errors);
        if ty.as_str() != "Bool" && !ty.is_unknown() {
            errors.push(TypeCheckError::NonBoolContract {
                found: ty.0,
                pos: postcondition.pos(),
            });
        }
    }

    let body_type = infer_block(&f.body, &local, errors);
    if !compatible(body_type.as_str(), &return_type_str, &local) {
        errors.push(TypeCheckError::IncompatibleReturn {
            expected: return_type_str,
            found: body_type.0,
            pos: f.pos,
        });
    }
}
