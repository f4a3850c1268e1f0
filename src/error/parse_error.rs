use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while parsing statements and
/// expressions.
pub enum ParseError {
    /// A token that cannot appear at this position of an expression.
    #[error("line {line}: unexpected token '{token}' in expression")]
    UnexpectedToken {
        /// The offending token, as written in the source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator or a closing parenthesis was found where an operand was
    /// expected, or the expression ended early.
    #[error("line {line}: expected a number or a name")]
    MissingOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` without a matching `(`.
    #[error("line {line}: closing parenthesis ')' has no matching '('")]
    UnmatchedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An opening parenthesis `(` that was never closed.
    #[error("line {line}: expected closing parenthesis ')' but none found")]
    UnclosedParen {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::MissingOperand { line }
            | Self::UnmatchedClosingParen { line }
            | Self::UnclosedParen { line } => *line,
        }
    }
}
