//! `pactc` — driver for the Pact compiler toolchain. Parses CLI arguments,
//! initializes logging, and dispatches to the pass that matches the
//! subcommand. Each pass is a pure function of its AST; the driver owns
//! only file I/O and exit-code mapping.

mod cli;
mod commands;
mod error;

pub use cli::{Cli, Commands};
pub use error::{PactcError, Result};

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Runs the CLI end to end, returning the process exit code.
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clean = match &cli.command {
        Commands::Lex(args) => commands::run_lex(&args.file)?,
        Commands::Parse(args) => commands::run_parse(&args.file)?,
        Commands::Check(args) => commands::run_check(&args.file)?,
        Commands::Compile(args) => commands::run_compile(&args.file, args.output.as_deref())?,
        Commands::Verify(args) => commands::run_verify(&args.file)?,
        Commands::Optimize(args) => commands::run_optimize(&args.file)?,
        Commands::Fmt(args) => commands::run_fmt(&args.file, args.write)?,
    };

    Ok(if clean { 0 } else { 1 })
}

/// Runs `check` against every path in `files` in parallel, collecting
/// results back in input order. Used when the driver is invoked with more
/// than one source file (see §5's multi-file note).
pub fn check_many(files: &[std::path::PathBuf]) -> Vec<(std::path::PathBuf, Result<bool>)> {
    files
        .par_iter()
        .map(|file| (file.clone(), commands::run_check(file)))
        .collect()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_env("PACTC_LOG").or_else(|_| EnvFilter::try_new("warn"))
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_file(source: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_many_preserves_input_order() {
        let clean = source_file("define f(x: Int) -> Int\ngiven\n  x\n");
        let broken = source_file("define g() -> Int\ngiven\n  true\n");

        let files = vec![clean.path().to_path_buf(), broken.path().to_path_buf()];
        let results = check_many(&files);

        assert_eq!(results[0].0, files[0]);
        assert_eq!(results[1].0, files[1]);
        assert!(results[0].1.as_ref().unwrap());
        assert!(results[1].1.is_err());
    }
}
