use std::fmt;

/// Represents one of the four arithmetic operators.
///
/// All operators are binary and left-associative. `*` and `/` bind tighter
/// than `+` and `-`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use esperanto::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength used by the shunting-yard parser. Higher binds
    /// tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator with `f64` semantics.
    ///
    /// Division by zero is not an error: it yields an infinity or `NaN`.
    ///
    /// # Example
    /// ```
    /// use esperanto::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0), 6.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A single element of a postfix expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A numeric literal, pushed as is.
    Number(f64),
    /// A name, resolved against the environment when pushed.
    Variable(String),
    /// An operator, applied to the two topmost values.
    Operator(BinaryOperator),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in reverse-Polish order.
///
/// Operators follow their operands, so evaluation needs a single stack and no
/// precedence lookups. Produced by
/// [`to_postfix`](crate::interpreter::parser::shunting_yard::to_postfix) and
/// owned by the statement that contains it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostfixExpr {
    terms: Vec<Term>,
}

impl PostfixExpr {
    /// Wraps an already ordered list of terms.
    #[must_use]
    pub const fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// The terms in evaluation order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// A top-level statement.
///
/// The language has exactly three statement forms. Each one carries the line
/// it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable assignment (e.g. `x = 1 + 2`).
    Assign {
        /// The variable being assigned.
        name: String,
        /// The value expression.
        expr: PostfixExpr,
        /// Line number in the source code.
        line: usize,
    },
    /// Constant declaration (e.g. `konst pi = 3.14159`).
    ConstDecl {
        /// The constant being declared.
        name: String,
        /// The value expression.
        expr: PostfixExpr,
        /// Line number in the source code.
        line: usize,
    },
    /// Print statement (e.g. `montru x * 2`).
    Print {
        /// The expression whose value is printed.
        expr: PostfixExpr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Assign { line, .. } | Self::ConstDecl { line, .. } | Self::Print { line, .. } => {
                *line
            },
        }
    }

    #[must_use]
    pub const fn expr(&self) -> &PostfixExpr {
        match self {
            Self::Assign { expr, .. } | Self::ConstDecl { expr, .. } | Self::Print { expr, .. } => {
                expr
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, expr, .. } => write!(f, "{name} = {expr}"),
            Self::ConstDecl { name, expr, .. } => write!(f, "konst {name} = {expr}"),
            Self::Print { expr, .. } => write!(f, "montru {expr}"),
        }
    }
}
