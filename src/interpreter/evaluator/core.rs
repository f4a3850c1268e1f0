use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{ast::Statement, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The names bound during a run.
///
/// Variables may be reassigned freely. Constants may be redeclared with
/// `konst`, but a plain assignment to a constant's name fails.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    pub variables: HashMap<String, f64>,
    pub constants: HashMap<String, f64>,
}

impl Environment {
    /// Resolves `name`, checking variables before constants.
    ///
    /// Unbound names evaluate to `0`.
    ///
    /// # Example
    /// ```
    /// use esperanto::interpreter::evaluator::core::Environment;
    ///
    /// let mut env = Environment::default();
    /// env.constants.insert("x".to_string(), 5.0);
    ///
    /// assert_eq!(env.lookup("x"), 5.0);
    /// assert_eq!(env.lookup("y"), 0.0);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> f64 {
        self.variables
            .get(name)
            .or_else(|| self.constants.get(name))
            .copied()
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
}

/// Stores the runtime evaluation context.
///
/// Holds the environment, the output produced so far and the step budget.
/// A `Context` lives for exactly one run; nothing carries over to the next.
pub struct Context {
    /// Variables and constants bound so far.
    pub environment: Environment,
    /// One line per executed print statement.
    pub output:      Vec<String>,
    pub(super) max_steps: Option<u64>,
    pub(super) steps:     u64,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with an empty environment and no step limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step_limit(None)
    }

    /// Creates a context that fails once more than `max_steps` postfix terms
    /// have been evaluated.
    #[must_use]
    pub fn with_step_limit(max_steps: Option<u64>) -> Self {
        Self { environment: Environment::default(),
               output: Vec::new(),
               max_steps,
               steps: 0 }
    }

    /// Executes `statements` in order, stopping at the first error.
    ///
    /// # Example
    /// ```
    /// use esperanto::{
    ///     config::StatementMode,
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
    /// };
    ///
    /// let statements =
    ///     parse_program(&tokenize("x = 4\nmontru x * 2"), StatementMode::Separated).unwrap();
    /// let mut context = Context::new();
    /// context.eval_program(&statements).unwrap();
    ///
    /// assert_eq!(context.output, vec!["8"]);
    /// ```
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        debug!(steps = self.steps, lines = self.output.len(), "program finished");
        Ok(())
    }

    /// Executes a single statement against the environment.
    ///
    /// # Errors
    /// `AssignmentToConstant` when assigning to a constant's name, plus any
    /// error from evaluating the expression.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assign { name, expr, line } => {
                if self.environment.is_constant(name) {
                    return Err(RuntimeError::AssignmentToConstant { name: name.clone(),
                                                                    line: *line, });
                }
                let value = self.eval(expr, *line)?;
                trace!(name = %name, value, "assigned variable");
                self.environment.variables.insert(name.clone(), value);
            },
            Statement::ConstDecl { name, expr, line } => {
                let value = self.eval(expr, *line)?;
                trace!(name = %name, value, "declared constant");
                self.environment.constants.insert(name.clone(), value);
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr, *line)?;
                self.output.push(value.to_string());
            },
        }
        Ok(())
    }

    /// Consumes the context, returning the printed lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}
