/// Core evaluation logic and context management.
///
/// Contains the runtime context, the environment of variables and constants,
/// and statement execution.
pub mod core;

/// Postfix expression evaluation.
///
/// The stack machine that reduces a reverse-Polish expression to a number,
/// including the step budget.
pub mod postfix;
