use crate::{
    ast::{BinaryOperator, PostfixExpr, Term},
    error::ParseError,
    interpreter::{
        lexer::{Paren, Token},
        parser::core::ParseResult,
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(BinaryOperator),
    /// Marker left by `(`; never popped by an operator.
    OpenParen,
}

/// Converts the tokens of one infix expression to postfix order.
///
/// Shunting-yard: operands go straight to the output, operators wait on a
/// stack until an operator of lower precedence arrives. Popping on equal
/// precedence makes every operator left-associative.
///
/// The parser also tracks whether an operand or an operator comes next, and
/// how many parentheses are open, so malformed input is rejected here rather
/// than producing a wrong value later.
///
/// # Parameters
/// - `tokens`: The expression's `(Token, line)` pairs, without separators.
///
/// # Returns
/// The expression in reverse-Polish order.
///
/// # Errors
/// - `UnexpectedToken` for an operand or `(` where an operator belongs, and for
///   keywords, `=`, separators and error tokens.
/// - `MissingOperand` when an operator or `)` comes where an operand belongs,
///   or the expression ends after an operator.
/// - `UnmatchedClosingParen` / `UnclosedParen` for unbalanced parentheses.
///
/// # Example
/// ```
/// use esperanto::interpreter::{lexer::tokenize, parser::shunting_yard::to_postfix};
///
/// let postfix = to_postfix(&tokenize("(2 + 3) * 4 - 1")).unwrap();
/// assert_eq!(postfix.to_string(), "2 3 + 4 * 1 -");
///
/// assert!(to_postfix(&tokenize("(2 + 3")).is_err());
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> ParseResult<PostfixExpr> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut open_parens = 0_usize;
    let mut expect_operand = true;
    let mut line = tokens.first().map_or(0, |(_, line)| *line);

    for (token, token_line) in tokens {
        line = *token_line;

        match token {
            Token::Number(value) if expect_operand => {
                output.push(Term::Number(*value));
                expect_operand = false;
            },
            Token::Identifier(name) if expect_operand => {
                output.push(Term::Variable(name.clone()));
                expect_operand = false;
            },

            Token::Operator(op) if !expect_operand => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Term::Operator(top));
                    stack.pop();
                }
                stack.push(Pending::Operator(*op));
                expect_operand = true;
            },
            Token::Operator(_) | Token::Paren(Paren::Close) if expect_operand => {
                return Err(ParseError::MissingOperand { line });
            },

            Token::Paren(Paren::Open) if expect_operand => {
                stack.push(Pending::OpenParen);
                open_parens += 1;
            },
            Token::Paren(Paren::Close) => {
                if open_parens == 0 {
                    return Err(ParseError::UnmatchedClosingParen { line });
                }
                open_parens -= 1;
                while let Some(pending) = stack.pop() {
                    match pending {
                        Pending::Operator(op) => output.push(Term::Operator(op)),
                        Pending::OpenParen => break,
                    }
                }
            },

            _ => {
                return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         line });
            },
        }
    }

    if expect_operand {
        return Err(ParseError::MissingOperand { line });
    }
    if open_parens > 0 {
        return Err(ParseError::UnclosedParen { line });
    }

    while let Some(pending) = stack.pop() {
        if let Pending::Operator(op) = pending {
            output.push(Term::Operator(op));
        }
    }

    Ok(PostfixExpr::new(output))
}
