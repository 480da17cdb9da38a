//! Command-line surface for `pactc`, one subcommand per compiler pass.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pactc - the Pact compiler toolchain.
#[derive(Parser, Debug)]
#[command(name = "pactc")]
#[command(author = "Pact Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex, parse, check, verify, optimize, format, and compile Pact sources", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise the log level from warn to debug.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one line per token: `line:col  TYPE  value`.
    Lex(FileArgs),

    /// Print import and declaration counts, plus a summary per declaration.
    Parse(FileArgs),

    /// Type-check the program, printing any errors found.
    Check(FileArgs),

    /// Emit generated target source.
    Compile(CompileArgs),

    /// Print one verification result per contract clause.
    Verify(FileArgs),

    /// Print the formatted, optimized program.
    Optimize(FileArgs),

    /// Format the program's source text.
    Fmt(FmtArgs),
}

#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Source file to process.
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Source file to process.
    pub file: PathBuf,

    /// Output file (defaults to stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FmtArgs {
    /// Source file to process.
    pub file: PathBuf,

    /// Overwrite the input file instead of printing to stdout.
    #[arg(short, long)]
    pub write: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lex_subcommand() {
        let cli = Cli::parse_from(["pactc", "lex", "a.pact"]);
        assert!(matches!(cli.command, Commands::Lex(_)));
    }

    #[test]
    fn parses_compile_with_output() {
        let cli = Cli::parse_from(["pactc", "compile", "a.pact", "-o", "a.py"]);
        match cli.command {
            Commands::Compile(args) => assert_eq!(args.output, Some(PathBuf::from("a.py"))),
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn parses_fmt_write_flag() {
        let cli = Cli::parse_from(["pactc", "fmt", "a.pact", "-w"]);
        match cli.command {
            Commands::Fmt(args) => assert!(args.write),
            _ => panic!("expected fmt command"),
        }
    }

    #[test]
    fn parses_global_verbose_before_subcommand() {
        let cli = Cli::parse_from(["pactc", "--verbose", "check", "a.pact"]);
        assert!(cli.verbose);
    }
}
