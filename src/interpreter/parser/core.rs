use tracing::{debug, trace};

use crate::{
    ast::Statement,
    config::StatementMode,
    error::ParseError,
    interpreter::{lexer::Token, parser::statement::parse_statement},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full token stream into statements.
///
/// This is the entry point for parsing. A cursor walks the tokens left to
/// right; wherever a statement shape matches, the statement and its whole
/// expression are consumed. Tokens that start no statement are skipped one at
/// a time without an error.
///
/// In [`StatementMode::Greedy`] separators are dropped before scanning, so the
/// first statement swallows everything after it.
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs from the lexer.
/// - `mode`: How far an expression reaches.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use esperanto::{
///     config::StatementMode,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("x = 1 + 2\nmontru x * 3");
/// let statements = parse_program(&tokens, StatementMode::Separated).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[1].to_string(), "montru x 3 *");
/// ```
pub fn parse_program(tokens: &[(Token, usize)],
                     mode: StatementMode)
                     -> ParseResult<Vec<Statement>> {
    let joined;
    let tokens = match mode {
        StatementMode::Separated => tokens,
        StatementMode::Greedy => {
            joined = tokens.iter()
                           .filter(|(token, _)| !matches!(token, Token::Separator(_)))
                           .cloned()
                           .collect::<Vec<_>>();
            &joined[..]
        },
    };

    let mut statements = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        if let Some((statement, consumed)) = parse_statement(&tokens[cursor..], mode)? {
            statements.push(statement);
            cursor += consumed;
        } else {
            let (token, line) = &tokens[cursor];
            if !matches!(token, Token::Separator(_)) {
                trace!(line, token = %token, "skipping token outside any statement");
            }
            cursor += 1;
        }
    }

    debug!(count = statements.len(), ?mode, "parsed program");
    Ok(statements)
}
