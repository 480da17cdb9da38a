//! Canonical source-text rendering for a parsed `Program`. A flat,
//! non-precedence-aware pretty-printer: binary operators render with a
//! single space on each side regardless of how tightly they bind, and a
//! nested `when`/`given` inside an expression renders only its head line —
//! full multi-line rendering is reserved for block-statement position.

mod block;
mod decl;
mod expr;
mod ty;
mod writer;

use pact_ast::{Declaration, Program};
use writer::Writer;

/// Renders `program` as formatted source text, imports first, then
/// declarations separated by blank lines, with a trailing newline.
pub fn format_program(program: &Program) -> String {
    let mut writer = Writer::new();

    for import in &program.imports {
        writer.push(0, &format!("import {}", import.module_path));
    }
    if !program.imports.is_empty() && !program.declarations.is_empty() {
        writer.blank();
    }

    for (i, decl) in program.declarations.iter().enumerate() {
        if i > 0 {
            writer.blank();
        }
        let lines = match decl {
            Declaration::Type(d) => decl::format_type_declaration(d),
            Declaration::Function(f) => decl::format_function_declaration(f),
        };
        writer.push_lines(lines);
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pact_lex::lex;
    use pact_parse::Parser;

    fn format_source(source: &str) -> String {
        let tokens = lex(source).unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        format_program(&program)
    }

    #[test]
    fn import_renders_as_dotted_path() {
        let out = format_source("import a.b.c\ndefine f() -> Int\ngiven\n  1\n");
        assert!(out.starts_with("import a.b.c\n"));
    }

    #[test]
    fn binary_operators_get_single_spaces_without_precedence_parens() {
        let out = format_source("define f() -> Int\ngiven\n  2 + 3 * 4\n");
        assert!(out.contains("2 + 3 * 4"));
    }

    #[test]
    fn function_signature_renders_params_and_contracts() {
        let out = format_source(
            "define f(x: Int) -> Int\n  expect x >= 0\n  ensure result >= 0\ngiven\n  x\n",
        );
        assert!(out.contains("define f(x: Int) -> Int"));
        assert!(out.contains("  expect x >= 0"));
        assert!(out.contains("  ensure result >= 0"));
        assert!(out.contains("\ngiven\n"));
    }

    #[test]
    fn nested_when_in_expression_position_renders_head_only() {
        use pact_ast::Expression;
        use pact_util::Pos;

        let pos = Pos::new(1, 1);
        let when_expr = Expression::When {
            condition: Box::new(Expression::Identifier("x".to_string(), pos)),
            then_block: pact_ast::Block::new(
                vec![pact_ast::Statement::ExpressionStatement {
                    expression: Expression::IntegerLiteral(1, pos),
                    pos,
                }],
                pos,
            ),
            else_block: Some(pact_ast::Block::new(
                vec![pact_ast::Statement::ExpressionStatement {
                    expression: Expression::IntegerLiteral(0, pos),
                    pos,
                }],
                pos,
            )),
            pos,
        };
        let rendered = expr::format_expr(&when_expr);
        assert_eq!(rendered, "when x otherwise");
    }

    #[test]
    fn block_position_when_renders_full_nested_form() {
        let out = format_source(
            "define f(x: Int) -> Int\ngiven\n  when x > 0\n    x\n  otherwise\n    0\n  x\n",
        );
        assert!(out.contains("  when x > 0"));
        assert!(out.contains("    x"));
        assert!(out.contains("  otherwise"));
        assert!(out.contains("    0"));
    }

    #[test]
    fn given_block_renders_one_arm_per_line() {
        let out = format_source(
            "define f(x: Int) -> Int\ngiven\n  given x\n    1 -> 1\n    _ -> 0\n",
        );
        assert!(out.contains("  given x"));
        assert!(out.contains("    1 -> 1"));
        assert!(out.contains("    _ -> 0"));
    }

    #[test]
    fn sum_type_renders_each_variant_on_its_own_line() {
        let out = format_source("type Option = | Some(Int) | Nothing\n");
        assert!(out.contains("type Option ="));
        assert!(out.contains("  | Some(Int)"));
        assert!(out.contains("  | Nothing"));
    }

    #[test]
    fn simple_type_with_invariant_renders_invariant_line() {
        let out = format_source("type PositiveInt = Int\n  invariant value > 0\n");
        assert!(out.contains("type PositiveInt = Int"));
        assert!(out.contains("  invariant value > 0"));
    }

    #[test]
    fn declarations_are_separated_by_a_blank_line() {
        let out = format_source("type A = Int\ndefine f() -> Int\ngiven\n  1\n");
        assert!(out.contains("type A = Int\n\ndefine f"));
    }
}
