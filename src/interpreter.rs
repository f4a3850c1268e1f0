/// The evaluator module executes statements and computes results.
///
/// The evaluator runs each statement in order against a fresh environment,
/// reduces postfix expressions on a value stack and collects printed lines.
///
/// # Responsibilities
/// - Evaluates postfix expressions with `f64` arithmetic.
/// - Maintains variables and write-protected constants.
/// - Reports runtime errors such as assigning to a constant.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat stream of
/// classified tokens: numbers, identifiers, operators, parentheses, keywords,
/// separators and error chunks. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Splits text into word runs and single symbols, tracking line numbers.
/// - Classifies each chunk.
/// - Never fails: unknown text becomes an error token for later stages.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// The parser walks the token stream with a cursor, recognizes the three
/// statement shapes and converts each statement's expression into postfix
/// order with the shunting-yard algorithm.
///
/// # Responsibilities
/// - Recognizes assignments, constant declarations and print statements.
/// - Orders expressions by operator precedence and parentheses.
/// - Rejects malformed expressions with located errors.
pub mod parser;
