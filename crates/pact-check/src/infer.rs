use crate::env::{compatible, type_to_string, TypeEnvironment, TypeStr};
use crate::error::TypeCheckError;
use pact_ast::{BinOp, Block, Expression, Statement, UnOp};

/// Infers the type of an expression, pushing every error it finds onto
/// `errors` and always returning *some* type so the caller can keep
/// checking the rest of the program — the checker never short-circuits.
pub fn infer_expr(expr: &Expression, env: &TypeEnvironment, errors: &mut Vec<TypeCheckError>) -> TypeStr {
    match expr {
        Expression::IntegerLiteral(..) => TypeStr::new("Int"),
        Expression::FloatLiteral(..) => TypeStr::new("Float"),
        Expression::StringLiteral(..) => TypeStr::new("String"),
        Expression::BoolLiteral(..) => TypeStr::bool(),

        Expression::Identifier(name, pos) => {
            if let Some(ty) = env.lookup_var(name) {
                ty.clone()
            } else if let Some(sig) = env.functions.get(name) {
                sig.return_type.clone()
            } else {
                errors.push(TypeCheckError::UndefinedIdentifier {
                    name: name.clone(),
                    pos: *pos,
                });
                TypeStr::unknown()
            }
        }

        Expression::BinaryOp { op, left, right, pos } => {
            let l = infer_expr(left, env, errors);
            let r = infer_expr(right, env, errors);
            infer_binary(*op, &l, &r, *pos, errors)
        }

        Expression::UnaryOp { op, operand, pos } => {
            let t = infer_expr(operand, env, errors);
            match op {
                UnOp::Not => {
                    if t.as_str() != "Bool" && !t.is_unknown() {
                        errors.push(TypeCheckError::Mismatch {
                            expected: "Bool".to_string(),
                            found: t.0,
                            pos: *pos,
                        });
                    }
                    TypeStr::bool()
                }
                UnOp::Neg => match t.as_str() {
                    "Int" | "Float" | "Unknown" => t,
                    _ => {
                        errors.push(TypeCheckError::Mismatch {
                            expected: "Int or Float".to_string(),
                            found: t.0,
                            pos: *pos,
                        });
                        TypeStr::unknown()
                    }
                },
            }
        }

        Expression::FunctionCall { callee, arguments, pos } => {
            if let Expression::Identifier(name, _) = callee.as_ref() {
                if let Some(sig) = env.functions.get(name).cloned() {
                    if arguments.len() != sig.parameters.len() {
                        errors.push(TypeCheckError::WrongArity {
                            name: name.clone(),
                            expected: sig.parameters.len(),
                            found: arguments.len(),
                            pos: *pos,
                        });
                    }
                    for (arg, param_ty) in arguments.iter().zip(sig.parameters.iter()) {
                        let arg_ty = infer_expr(arg, env, errors);
                        if !compatible(arg_ty.as_str(), param_ty.as_str(), env) {
                            errors.push(TypeCheckError::Mismatch {
                                expected: param_ty.0.clone(),
                                found: arg_ty.0,
                                pos: arg.pos(),
                            });
                        }
                    }
                    return sig.return_type;
                }
            }
            // Computed callee, or an identifier with no known signature:
            // deliberately partial inference, matching `MemberAccess` and
            // `RecordLiteral` below.
            TypeStr::unknown()
        }

        Expression::MemberAccess { .. } => TypeStr::unknown(),
        Expression::RecordLiteral { .. } => TypeStr::unknown(),

        Expression::ArrayLiteral { elements, pos } => {
            let element_types: Vec<TypeStr> = elements
                .iter()
                .map(|e| infer_expr(e, env, errors))
                .collect();
            let known = element_types.iter().find(|t| !t.is_unknown());
            if let Some(expected) = known {
                for t in &element_types {
                    if !t.is_unknown() && t.as_str() != expected.as_str() {
                        errors.push(TypeCheckError::Mismatch {
                            expected: expected.0.clone(),
                            found: t.0.clone(),
                            pos: *pos,
                        });
                    }
                }
                TypeStr::new(format!("Array[{}]", expected))
            } else {
                TypeStr::new("Array[Unknown]")
            }
        }

        Expression::When { condition, then_block, else_block, pos } => {
            let cond_ty = infer_expr(condition, env, errors);
            if cond_ty.as_str() != "Bool" && !cond_ty.is_unknown() {
                errors.push(TypeCheckError::Mismatch {
                    expected: "Bool".to_string(),
                    found: cond_ty.0,
                    pos: condition.pos(),
                });
            }
            let then_ty = infer_block(then_block, env, errors);
            match else_block {
                Some(else_block) => {
                    let else_ty = infer_block(else_block, env, errors);
                    if !then_ty.is_unknown() && !else_ty.is_unknown() && then_ty.as_str() != else_ty.as_str() {
                        errors.push(TypeCheckError::Mismatch {
                            expected: then_ty.0.clone(),
                            found: else_ty.0.clone(),
                            pos: *pos,
                        });
                    }
                    if then_ty.is_unknown() {
                        else_ty
                    } else {
                        then_ty
                    }
                }
                // No else branch: nothing to compare against, so the `when`
                // takes on the `then` branch's type.
                None => then_ty,
            }
        }

        Expression::Given { scrutinee, cases, .. } => {
            infer_expr(scrutinee, env, errors);
            let mut result = TypeStr::unknown();
            for (i, case) in cases.iter().enumerate() {
                let ty = infer_expr(&case.expression, env, errors);
                if i == 0 {
                    result = ty;
                }
            }
            result
        }
    }
}

fn infer_binary(op: BinOp, l: &TypeStr, r: &TypeStr, pos: pact_util::Pos, errors: &mut Vec<TypeCheckError>) -> TypeStr {
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => {
            match (l.as_str(), r.as_str()) {
                (a, _) | (_, a) if a == "Unknown" => TypeStr::unknown(),
                ("Int", "Int") => TypeStr::new("Int"),
                ("Float", "Float") | ("Int", "Float") | ("Float", "Int") => TypeStr::new("Float"),
                ("String", "String") if op == BinOp::Add => TypeStr::new("String"),
                _ => {
                    errors.push(TypeCheckError::Mismatch {
                        expected: "matching numeric (or String, for +) operands".to_string(),
                        found: format!("{} {} {}", l, op.as_str(), r),
                        pos,
                    });
                    TypeStr::unknown()
                }
            }
        }
        BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge => {
            if l.is_unknown() || r.is_unknown() {
                return TypeStr::bool();
            }
            let numeric = |t: &str| t == "Int" || t == "Float";
            if !numeric(l.as_str()) || !numeric(r.as_str()) {
                errors.push(TypeCheckError::Mismatch {
                    expected: "numeric operands".to_string(),
                    found: format!("{} {} {}", l, op.as_str(), r),
                    pos,
                });
            }
            TypeStr::bool()
        }
        BinOp::Eq | BinOp::Ne => TypeStr::bool(),
        BinOp::And | BinOp::Or => {
            let ok = |t: &TypeStr| t.as_str() == "Bool" || t.is_unknown();
            if !ok(l) || !ok(r) {
                errors.push(TypeCheckError::Mismatch {
                    expected: "Bool".to_string(),
                    found: format!("{} {} {}", l, op.as_str(), r),
                    pos,
                });
            }
            TypeStr::bool()
        }
    }
}

/// A block's type is the type of its last statement if that statement is an
/// `ExpressionStatement`; an empty block, or one ending in a
/// `LetBinding`/`Assignment`, types as `"Unit"`. Earlier statements and
/// `LetBinding`/`Assignment` values are still walked for errors even though
/// the current grammar never produces them, since the AST models them as
/// first-class statements.
pub fn infer_block(block: &Block, env: &TypeEnvironment, errors: &mut Vec<TypeCheckError>) -> TypeStr {
    let mut local = env.clone();
    let mut result = TypeStr::new("Unit");
    for (i, stmt) in block.statements.iter().enumerate() {
        let is_last = i + 1 == block.statements.len();
        let stmt_ty = match stmt {
            Statement::Block(b) => {
                infer_block(b, &local, errors);
                TypeStr::new("Unit")
            }
            Statement::LetBinding { name, type_annotation, value, pos } => {
                let value_ty = infer_expr(value, &local, errors);
                let bound_ty = if let Some(annotation) = type_annotation {
                    let annotated = type_to_string(annotation);
                    if !compatible(value_ty.as_str(), &annotated, &local) {
                        errors.push(TypeCheckError::Mismatch {
                            expected: annotated.clone(),
                            found: value_ty.0,
                            pos: *pos,
                        });
                    }
                    TypeStr::new(annotated)
                } else {
                    value_ty
                };
                local.vars.insert(name.clone(), bound_ty);
                TypeStr::new("Unit")
            }
            Statement::Assignment { target, value, pos } => {
                let value_ty = infer_expr(value, &local, errors);
                match local.lookup_var(target).cloned() {
                    Some(existing) => {
                        if !compatible(value_ty.as_str(), existing.as_str(), &local) {
                            errors.push(TypeCheckError::Mismatch {
                                expected: existing.0,
                                found: value_ty.0,
                                pos: *pos,
                            });
                        }
                    }
                    None => errors.push(TypeCheckError::UndefinedIdentifier {
                        name: target.clone(),
                        pos: *pos,
                    }),
                }
                TypeStr::new("Unit")
            }
            Statement::ExpressionStatement { expression, .. } => infer_expr(expression, &local, errors),
        };
        if is_last {
            result = stmt_ty;
        }
    }
    result
}
