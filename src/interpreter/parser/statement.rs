use crate::{
    ast::Statement,
    config::StatementMode,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{core::ParseResult, shunting_yard::to_postfix},
    },
};

/// Parses the statement starting at the front of `tokens`, if any.
///
/// Recognized shapes:
/// - `name = <expression>` → [`Statement::Assign`]
/// - `konst name = <expression>` → [`Statement::ConstDecl`]
/// - `montru <expression>` → [`Statement::Print`]
///
/// A shape only matches when its expression span holds at least one token.
///
/// # Parameters
/// - `tokens`: The remaining tokens, starting at the cursor.
/// - `mode`: Decides where the expression span ends.
///
/// # Returns
/// `Some((statement, consumed))` where `consumed` counts every token the
/// statement used, or `None` when no shape matches here.
///
/// # Errors
/// Propagates any error from parsing the expression span.
pub fn parse_statement(tokens: &[(Token, usize)],
                       mode: StatementMode)
                       -> ParseResult<Option<(Statement, usize)>> {
    match tokens {
        [(Token::Identifier(name), line), (Token::Equals, _), rest @ ..] => {
            let span = expression_span(rest, mode);
            if span.is_empty() {
                return Ok(None);
            }
            let expr = to_postfix(span)?;
            Ok(Some((Statement::Assign { name: name.clone(),
                                         expr,
                                         line: *line },
                     2 + span.len())))
        },

        [(Token::Keyword(Keyword::Konst), line),
         (Token::Identifier(name), _),
         (Token::Equals, _),
         rest @ ..] => {
            let span = expression_span(rest, mode);
            if span.is_empty() {
                return Ok(None);
            }
            let expr = to_postfix(span)?;
            Ok(Some((Statement::ConstDecl { name: name.clone(),
                                            expr,
                                            line: *line },
                     3 + span.len())))
        },

        [(Token::Keyword(Keyword::Montru), line), rest @ ..] => {
            let span = expression_span(rest, mode);
            if span.is_empty() {
                return Ok(None);
            }
            let expr = to_postfix(span)?;
            Ok(Some((Statement::Print { expr, line: *line }, 1 + span.len())))
        },

        _ => Ok(None),
    }
}

/// Returns the tokens that belong to the expression at the front of `tokens`.
fn expression_span(tokens: &[(Token, usize)], mode: StatementMode) -> &[(Token, usize)] {
    match mode {
        StatementMode::Greedy => tokens,
        StatementMode::Separated => {
            let end = tokens.iter()
                            .position(|(token, _)| matches!(token, Token::Separator(_)))
                            .unwrap_or(tokens.len());
            &tokens[..end]
        },
    }
}
