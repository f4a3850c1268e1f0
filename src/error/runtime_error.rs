use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to assign to a name that is bound as a constant.
    #[error("line {line}: '{name}' is a constant and cannot be reassigned")]
    AssignmentToConstant {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator found fewer than two operands on the stack.
    #[error("line {line}: operator is missing an operand")]
    StackUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression did not reduce to exactly one value.
    #[error("line {line}: expression left {remaining} values instead of one")]
    MalformedExpression {
        /// How many values were left on the stack.
        remaining: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The run evaluated more terms than the configured limit allows.
    #[error("line {line}: step limit of {limit} exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::AssignmentToConstant { line, .. }
            | Self::StackUnderflow { line }
            | Self::MalformedExpression { line, .. }
            | Self::StepLimitExceeded { line, .. } => *line,
        }
    }
}
