use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::ast::BinaryOperator;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Every variant carries the literal it was built from, so the token's
/// `Display` output is its source spelling.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(f64),
    /// Identifier tokens; variable or constant names such as `x` or `rapido`.
    Identifier(String),
    /// `+`, `-`, `*` or `/`.
    Operator(BinaryOperator),
    /// `(` or `)`.
    Paren(Paren),
    /// A reserved word such as `konst` or `montru`.
    Keyword(Keyword),
    /// `=`
    Equals,
    /// A newline or `;`, ending the current statement.
    Separator(Separator),
    /// A chunk that matched no other category. Not fatal on its own.
    Error(String),
}

impl Token {
    /// Classifies a single chunk of source text.
    ///
    /// Numbers win over keywords, keywords over operators, operators over
    /// identifiers, and anything unrecognized becomes [`Token::Error`].
    ///
    /// # Example
    /// ```
    /// use esperanto::{
    ///     ast::BinaryOperator,
    ///     interpreter::lexer::{Keyword, Token},
    /// };
    ///
    /// assert_eq!(Token::classify("12"), Token::Number(12.0));
    /// assert_eq!(Token::classify("montru"), Token::Keyword(Keyword::Montru));
    /// assert_eq!(Token::classify("/"), Token::Operator(BinaryOperator::Div));
    /// assert_eq!(Token::classify("nombro"), Token::Identifier("nombro".to_string()));
    /// assert_eq!(Token::classify("$"), Token::Error("$".to_string()));
    /// ```
    #[must_use]
    pub fn classify(chunk: &str) -> Self {
        if let Some(value) = parse_number(chunk) {
            Self::Number(value)
        } else if let Some(keyword) = Keyword::from_spelling(chunk) {
            Self::Keyword(keyword)
        } else if let Some(op) = BinaryOperator::from_symbol(chunk) {
            Self::Operator(op)
        } else if is_identifier(chunk) {
            Self::Identifier(chunk.to_string())
        } else {
            match chunk {
                "(" => Self::Paren(Paren::Open),
                ")" => Self::Paren(Paren::Close),
                "=" => Self::Equals,
                ";" => Self::Separator(Separator::Semicolon),
                "\n" => Self::Separator(Separator::NewLine),
                _ => Self::Error(chunk.to_string()),
            }
        }
    }

    /// The token's kind tag: `NUMBER`, `IDENTIFIER`, `OPERATOR`, `PAREN`,
    /// `EQUALS`, `SEPARATOR`, `ERROR`, or the keyword's own tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Identifier(_) => "IDENTIFIER",
            Self::Operator(_) => "OPERATOR",
            Self::Paren(_) => "PAREN",
            Self::Keyword(keyword) => keyword.tag(),
            Self::Equals => "EQUALS",
            Self::Separator(_) => "SEPARATOR",
            Self::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) | Self::Error(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Paren(Paren::Open) => write!(f, "("),
            Self::Paren(Paren::Close) => write!(f, ")"),
            Self::Keyword(keyword) => write!(f, "{}", keyword.spelling()),
            Self::Equals => write!(f, "="),
            Self::Separator(Separator::NewLine) => writeln!(f),
            Self::Separator(Separator::Semicolon) => write!(f, ";"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Separator {
    NewLine,
    Semicolon,
}

/// Reserved words.
///
/// Only `konst` and `montru` start statements. The rest are reserved for
/// control flow and functions, which the language does not have, so they
/// cannot be used as names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `konst`, declares a constant.
    Konst,
    /// `montru`, prints a value.
    Montru,
    /// `dum`
    Dum,
    /// `se`
    Se,
    /// `alie`
    Alie,
    /// `ĉesu`
    Cxesu,
    /// `daŭrigu`
    Dauxrigu,
    /// `funkcio`
    Funkcio,
    /// `fino`
    Fino,
    /// `enigu`
    Enigu,
}

impl Keyword {
    pub const ALL: [Self; 10] = [Self::Konst,
                                 Self::Montru,
                                 Self::Dum,
                                 Self::Se,
                                 Self::Alie,
                                 Self::Cxesu,
                                 Self::Dauxrigu,
                                 Self::Funkcio,
                                 Self::Fino,
                                 Self::Enigu];

    #[must_use]
    pub fn from_spelling(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.spelling() == word)
    }

    /// The keyword as written in source.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Konst => "konst",
            Self::Montru => "montru",
            Self::Dum => "dum",
            Self::Se => "se",
            Self::Alie => "alie",
            Self::Cxesu => "ĉesu",
            Self::Dauxrigu => "daŭrigu",
            Self::Funkcio => "funkcio",
            Self::Fino => "fino",
            Self::Enigu => "enigu",
        }
    }

    /// The upper-cased spelling, used as the token kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Konst => "KONST",
            Self::Montru => "MONTRU",
            Self::Dum => "DUM",
            Self::Se => "SE",
            Self::Alie => "ALIE",
            Self::Cxesu => "ĈESU",
            Self::Dauxrigu => "DAŬRIGU",
            Self::Funkcio => "FUNKCIO",
            Self::Fino => "FINO",
            Self::Enigu => "ENIGU",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Raw chunks of source text, before classification.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Chunk {
    /// `3.14`; kept whole so decimals survive chunking.
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,
    /// A maximal run of letters, digits and underscores.
    #[regex(r"\w+")]
    Word,
    /// Any single character that is neither whitespace nor a word character.
    #[regex(r"[^\s\w]")]
    Symbol,
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Whitespace other than newlines.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

/// Splits `source` into classified tokens paired with their 1-based line.
///
/// The lexer never fails. Text it cannot make sense of becomes a
/// [`Token::Error`], and later stages decide whether that matters.
///
/// # Example
/// ```
/// use esperanto::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Keyword, Separator, Token, tokenize},
/// };
///
/// let tokens = tokenize("montru 2 +\n3");
/// assert_eq!(tokens,
///            vec![(Token::Keyword(Keyword::Montru), 1),
///                 (Token::Number(2.0), 1),
///                 (Token::Operator(BinaryOperator::Add), 1),
///                 (Token::Separator(Separator::NewLine), 1),
///                 (Token::Number(3.0), 2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Chunk::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        // Read before `next`, which bumps the counter when it consumes a newline.
        let line = lexer.extras.line;
        let Some(chunk) = lexer.next() else {
            break;
        };
        let slice = lexer.slice();

        let token = match chunk {
            Ok(Chunk::NewLine) => Token::Separator(Separator::NewLine),
            Ok(_) => Token::classify(slice),
            Err(()) => Token::Error(slice.to_string()),
        };
        tokens.push((token, line));
    }

    debug!(count = tokens.len(), "tokenized source");
    tokens
}

/// Parses a chunk as a number if it starts with a digit.
///
/// Requiring a leading digit keeps spellings such as `inf` or `NaN`, which
/// `f64::from_str` would accept, in the identifier space.
fn parse_number(chunk: &str) -> Option<f64> {
    if !chunk.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    chunk.parse().ok()
}

fn is_identifier(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
}
