use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, ValueEnum};
use esperanto::{
    Outcome,
    config::{Config, StatementMode},
    interpreter::{lexer::tokenize, parser::core::parse_program},
    run_with,
};
use tracing_subscriber::EnvFilter;

/// esperanto runs small arithmetic programs written with Esperanto keywords:
/// `x = 1 + 2`, `konst pi = 3.14`, `montru x * pi`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells esperanto to treat CONTENTS as a path to a file.
    #[arg(short, long)]
    file: bool,

    /// Ignore line breaks and `;`, letting the first statement consume the
    /// rest of the program.
    #[arg(long)]
    greedy: bool,

    /// Maximum number of expression terms to evaluate. 0 disables the limit.
    #[arg(long, default_value_t = esperanto::config::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// What to print.
    #[arg(long, value_enum, default_value_t = Emit::Output)]
    emit: Emit,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The program, or a path with --file. Read from stdin when absent.
    contents: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One token per line: line, kind and value.
    Tokens,
    /// One statement per line, with its expression in postfix order.
    Postfix,
    /// Run the program and print its output.
    Output,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match try_main(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn try_main(args: &Args) -> Result<ExitCode> {
    let source = read_source(args)?;
    let config = Config::default().with_mode(if args.greedy {
                                                  StatementMode::Greedy
                                              } else {
                                                  StatementMode::Separated
                                              })
                                  .with_max_steps((args.max_steps > 0).then_some(args.max_steps));

    match args.emit {
        Emit::Tokens => {
            for (token, line) in tokenize(&source) {
                println!("{line}\t{}\t{}", token.kind(), token.to_string().escape_debug());
            }
            Ok(ExitCode::SUCCESS)
        },
        Emit::Postfix => {
            let statements = parse_program(&tokenize(&source), config.mode)?;
            for statement in statements {
                println!("{}\t{statement}", statement.line());
            }
            Ok(ExitCode::SUCCESS)
        },
        Emit::Output => {
            let outcome = run_with(&source, &config);
            println!("{outcome}");
            Ok(if matches!(outcome, Outcome::Failed(_)) {
                   ExitCode::FAILURE
               } else {
                   ExitCode::SUCCESS
               })
        },
    }
}

fn read_source(args: &Args) -> Result<String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            fs::read_to_string(path).with_context(|| {
                                        format!("Failed to read the input file '{path}'. Perhaps \
                                                 this file does not exist?")
                                    })
        },
        (Some(script), false) => Ok(script.clone()),
        (None, _) => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)
                       .context("Failed to read the program from stdin")?;
            Ok(script)
        },
    }
}

/// Logs go to stderr so program output on stdout stays clean. `RUST_LOG`
/// takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
