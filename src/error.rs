/// Parsing errors.
///
/// Defines the errors the statement parser and the shunting-yard expression
/// parser can raise: stray tokens inside an expression, missing operands and
/// unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the postfix stack
/// machine executes statements, such as reassigning a constant.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a run.
///
/// Both phases report through this type so callers only need a single
/// `Result` to handle a complete lex, parse and evaluate pass.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The program could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
