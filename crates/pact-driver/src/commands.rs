//! One function per subcommand. Each reads its source file, runs the
//! relevant pass(es), and returns whether the program was clean — `false`
//! maps to a non-zero exit code without being a hard error.

use std::path::Path;

use pact_ast::Declaration;
use tracing::debug;

use crate::error::{PactcError, Result};

fn read(file: &Path) -> Result<String> {
    debug!(file = %file.display(), "reading source file");
    Ok(std::fs::read_to_string(file)?)
}

pub fn run_lex(file: &Path) -> Result<bool> {
    let source = read(file)?;
    let tokens = pact_lex::lex(&source)?;
    for token in &tokens {
        println!("{}  {:?}  {}", token.pos, token.kind, token.text);
    }
    Ok(true)
}

pub fn run_parse(file: &Path) -> Result<bool> {
    let program = parse(file)?;
    println!(
        "{} import(s), {} declaration(s)",
        program.imports.len(),
        program.declarations.len()
    );
    for decl in &program.declarations {
        match decl {
            Declaration::Type(d) => println!("{}  type {}", d.pos, d.name),
            Declaration::Function(f) => println!(
                "{}  define {}({} param(s)) -> {:?}",
                f.pos,
                f.name,
                f.parameters.len(),
                f.return_type
            ),
        }
    }
    Ok(true)
}

pub fn run_check(file: &Path) -> Result<bool> {
    let program = parse(file)?;
    let errors = pact_check::check_program(&program);
    for err in &errors {
        eprintln!("{}: {err}", err.pos());
    }
    if errors.is_empty() {
        Ok(true)
    } else {
        Err(PactcError::TypeCheck(errors.len()))
    }
}

pub fn run_compile(file: &Path, output: Option<&Path>) -> Result<bool> {
    let program = parse(file)?;
    let code = pact_gen::generate_program(&program)?;
    match output {
        Some(path) => std::fs::write(path, code)?,
        None => print!("{code}"),
    }
    Ok(true)
}

pub fn run_verify(file: &Path) -> Result<bool> {
    let program = parse(file)?;
    let results = pact_verify::verify_program(&program);
    let mut any_violated = false;
    for result in &results {
        let glyph = match result.status {
            pact_verify::Status::Proven => '\u{2713}',
            pact_verify::Status::Unproven => '?',
            pact_verify::Status::Violated => {
                any_violated = true;
                '\u{2717}'
            }
        };
        println!("{glyph} {}: {}", result.declaration, result.message);
    }
    Ok(!any_violated)
}

pub fn run_optimize(file: &Path) -> Result<bool> {
    let program = parse(file)?;
    let (optimized, count) = pact_opt::optimize(&program);
    print!("{}", pact_fmt::format_program(&optimized));
    eprintln!("{count} rewrite(s) applied");
    Ok(true)
}

pub fn run_fmt(file: &Path, write: bool) -> Result<bool> {
    let program = parse(file)?;
    let formatted = pact_fmt::format_program(&program);
    if write {
        std::fs::write(file, formatted)?;
    } else {
        print!("{formatted}");
    }
    Ok(true)
}

fn parse(file: &Path) -> Result<pact_ast::Program> {
    let source = read(file)?;
    let tokens = pact_lex::lex(&source)?;
    Ok(pact_parse::Parser::new(tokens).parse()?)
}
