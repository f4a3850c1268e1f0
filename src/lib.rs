//! # esperanto
//!
//! esperanto is a tiny arithmetic language with Esperanto keywords, written in
//! Rust. Programs are made of three statements: `name = expr` assigns a
//! variable, `konst name = expr` declares a constant and `montru expr` prints
//! a value. Expressions use `+ - * /` and parentheses.
//!
//! Source text is tokenized, each expression is converted to postfix order
//! with the shunting-yard algorithm, and the statements run on a small stack
//! machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::fmt;

use tracing::debug;

use crate::{
    config::Config,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement, postfix expression and operator types
/// produced by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the three statement forms.
/// - Represents expressions as postfix term sequences.
/// - Knows operator precedence and arithmetic.
pub mod ast;
/// Run settings.
///
/// Holds the statement separation mode and the evaluation step limit.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. Each error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for parser and evaluator failures.
/// - Attaches line numbers and messages for user feedback.
/// - Joins both phases into a single top-level `Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Notice rendered when a run receives no program text.
pub const NO_CODE_NOTICE: &str = "No code supplied!";

/// The result of one run, ready to hand to whatever displays it.
#[derive(Debug)]
pub enum Outcome {
    /// The source was empty or only whitespace. Nothing was executed.
    NoCode,
    /// The program ran to completion and printed these lines.
    Output(Vec<String>),
    /// The program was aborted. No output is kept.
    Failed(Error),
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// The printed lines, if the run completed.
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Self::Output(lines) => Some(lines.as_slice()),
            Self::NoCode | Self::Failed(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCode => write!(f, "{NO_CODE_NOTICE}"),
            Self::Output(lines) => write!(f, "{}", lines.join("\n")),
            Self::Failed(e) => write!(f, "Error: {e}"),
        }
    }
}

/// Runs a program with the default [`Config`].
///
/// # Examples
/// ```
/// use esperanto::run;
///
/// let outcome = run("konst a = 2\nb = a * 3\nmontru b + 1");
/// assert_eq!(outcome.to_string(), "7");
///
/// // Constants cannot be reassigned.
/// let outcome = run("konst x = 5\nx = 6\nmontru x");
/// assert!(outcome.to_string().starts_with("Error:"));
///
/// assert_eq!(run("   ").to_string(), esperanto::NO_CODE_NOTICE);
/// ```
#[must_use]
pub fn run(source: &str) -> Outcome {
    run_with(source, &Config::default())
}

/// Runs a program with explicit settings.
///
/// Blank source gives [`Outcome::NoCode`] without lexing anything. Otherwise
/// the full pipeline runs and either every printed line or the error is
/// returned, never both.
#[must_use]
pub fn run_with(source: &str, config: &Config) -> Outcome {
    if source.trim().is_empty() {
        debug!("no code supplied");
        return Outcome::NoCode;
    }

    match execute(source, config) {
        Ok(lines) => Outcome::Output(lines),
        Err(e) => {
            debug!(error = %e, "run failed");
            Outcome::Failed(e)
        },
    }
}

/// Lexes, parses and evaluates `source`, returning the printed lines.
///
/// Unlike [`run_with`] this does not treat blank input specially: an empty
/// program simply prints nothing.
///
/// # Errors
/// Returns an error if parsing fails or if evaluation aborts.
///
/// # Examples
/// ```
/// use esperanto::{config::Config, execute};
///
/// let lines = execute("montru 2 + 3 * 4; montru (2 + 3) * 4", &Config::default()).unwrap();
/// assert_eq!(lines, vec!["14", "20"]);
///
/// assert!(execute("montru (1 + 2", &Config::default()).is_err());
/// ```
pub fn execute(source: &str, config: &Config) -> Result<Vec<String>, Error> {
    let tokens = tokenize(source);
    let statements = parse_program(&tokens, config.mode)?;

    let mut context = Context::with_step_limit(config.max_steps);
    context.eval_program(&statements)?;

    Ok(context.into_output())
}
