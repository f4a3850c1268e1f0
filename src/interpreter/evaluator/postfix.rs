use crate::{
    ast::{PostfixExpr, Term},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a postfix expression on a value stack.
    ///
    /// Numbers are pushed as they are and names are pushed with their current
    /// binding. An operator pops the right operand first, then the left, and
    /// pushes the result.
    ///
    /// # Parameters
    /// - `expr`: The expression in reverse-Polish order.
    /// - `line`: Line of the owning statement, for error reporting.
    ///
    /// # Returns
    /// The single value left on the stack.
    ///
    /// # Errors
    /// - `StackUnderflow` if an operator finds fewer than two values.
    /// - `MalformedExpression` if the stack does not end with exactly one
    ///   value.
    /// - `StepLimitExceeded` if the run's step budget runs out.
    ///
    /// # Example
    /// ```
    /// use esperanto::{
    ///     ast::{BinaryOperator, PostfixExpr, Term},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.environment.variables.insert("x".to_string(), 6.0);
    ///
    /// // x 4 / 1 +
    /// let expr = PostfixExpr::new(vec![Term::Variable("x".to_string()),
    ///                                  Term::Number(4.0),
    ///                                  Term::Operator(BinaryOperator::Div),
    ///                                  Term::Number(1.0),
    ///                                  Term::Operator(BinaryOperator::Add)]);
    ///
    /// assert_eq!(context.eval(&expr, 1).unwrap(), 2.5);
    /// ```
    pub fn eval(&mut self, expr: &PostfixExpr, line: usize) -> EvalResult<f64> {
        let mut stack: Vec<f64> = Vec::with_capacity(expr.len());

        for term in expr.terms() {
            self.step(line)?;

            match term {
                Term::Number(value) => stack.push(*value),
                Term::Variable(name) => stack.push(self.environment.lookup(name)),
                Term::Operator(op) => {
                    let right = stack.pop().ok_or(RuntimeError::StackUnderflow { line })?;
                    let left = stack.pop().ok_or(RuntimeError::StackUnderflow { line })?;
                    stack.push(op.apply(left, right));
                },
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(RuntimeError::MalformedExpression { remaining: rest.len(),
                                                            line }),
        }
    }

    /// Counts one evaluated term against the step budget.
    fn step(&mut self, line: usize) -> EvalResult<()> {
        self.steps += 1;
        match self.max_steps {
            Some(limit) if self.steps > limit => {
                Err(RuntimeError::StepLimitExceeded { limit, line })
            },
            _ => Ok(()),
        }
    }
}
