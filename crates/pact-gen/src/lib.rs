//! The code generator: `Program` in, a Python-shaped source string out. A
//! syntax-directed walker, one lowering function per AST shape, with a fixed
//! runtime preamble declaring the `Success`/`Error` tag classes that lowered
//! `Result`-returning code constructs.

mod error;
mod lower_expr;
mod lower_fn;
mod lower_stmt;
mod lower_type;
mod preamble;
mod writer;

pub use error::CodeGenError;

use pact_ast::{Declaration, Program};
use preamble::PREAMBLE;
use writer::Writer;

/// Generates a complete target-language module for `program`.
pub fn generate_program(program: &Program) -> Result<String, CodeGenError> {
    let mut writer = Writer::new();
    writer.line(PREAMBLE.trim_end());
    writer.blank();

    for import in &program.imports {
        writer.line(&format!("import {}", import.module_path));
    }
    if !program.imports.is_empty() {
        writer.blank();
    }

    for decl in &program.declarations {
        match decl {
            Declaration::Type(type_decl) => lower_type::lower_type_declaration(&mut writer, type_decl)?,
            Declaration::Function(f) => lower_fn::lower_function(&mut writer, f)?,
        }
    }

    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pact_lex::lex;
    use pact_parse::Parser;

    fn generate(source: &str) -> String {
        let tokens = lex(source).unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        generate_program(&program).unwrap()
    }

    #[test]
    fn preamble_declares_success_and_error() {
        let code = generate("define f() -> Int\ngiven\n  1\n");
        assert!(code.contains("class Success:"));
        assert!(code.contains("class Error:"));
    }

    #[test]
    fn import_lowers_to_dotted_import() {
        let code = generate("import a.b.c\ndefine f() -> Int\ngiven\n  1\n");
        assert!(code.contains("import a.b.c"));
    }

    #[test]
    fn function_body_result_is_deferred_past_postconditions() {
        let code = generate("define f(x: Int) -> Int\n  ensure result >= 0\ngiven\n  x\n");
        let result_line = code.find("result = x").unwrap();
        let assert_line = code.find("assert (result >= 0)").unwrap();
        let return_line = code.find("return result").unwrap();
        assert!(result_line < assert_line && assert_line < return_line);
    }

    #[test]
    fn division_always_lowers_to_floor_division() {
        let code = generate("define f() -> Int\ngiven\n  7 / 2\n");
        assert!(code.contains("(7 // 2)"));
    }

    #[test]
    fn sum_type_emits_base_and_variant_classes() {
        let code = generate("type Option = | Some(Int) | None\n");
        assert!(code.contains("class Option:"));
        assert!(code.contains("class Some(Option):"));
        assert!(code.contains("class None(Option):"));
        assert!(code.contains("self.v0 = v0"));
    }

    #[test]
    fn simple_type_asserts_invariant_in_constructor() {
        let code = generate("type PositiveInt = Int\n  invariant value > 0\n");
        assert!(code.contains("def __init__(self, value):"));
        assert!(code.contains("assert (value > 0)"));
        assert!(code.contains("self.value = value"));
    }

    #[test]
    fn given_lowers_to_immediately_invoked_lambda() {
        let code = generate("define f(x: Int) -> Int\ngiven\n  given x\n    1 -> 1\n    _ -> 0\n");
        assert!(code.contains("(lambda _g:"));
        assert!(code.contains(")(x)"));
    }

    #[test]
    fn statement_level_when_lowers_to_if_else() {
        let code = generate(
            "define f(x: Int) -> Int\ngiven\n  when x > 0\n    x\n  otherwise\n    0\n  x\n",
        );
        assert!(code.contains("if (x > 0):"));
        assert!(code.contains("else:"));
    }
}
