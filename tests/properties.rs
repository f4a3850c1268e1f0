//! Property-based tests for the lexer and the evaluator.
//!
//! 1. Lexing, printing the tokens back and lexing again gives the same
//!    tokens.
//! 2. Arithmetic matches a direct reference evaluation, both for flat
//!    expressions that rely on precedence and for fully parenthesized trees.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use esperanto::{
    ast::BinaryOperator,
    config::Config,
    execute,
    interpreter::lexer::{Keyword, Token, tokenize},
};
use proptest::prelude::*;

fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::Div)]
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| Keyword::from_spelling(s).is_none())
}

/// Source chunks that lex to a number, identifier, operator or paren.
fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![(0_u32..100_000).prop_map(|n| n.to_string()),
                (0_u32..1000, 1_u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
                identifier_strategy(),
                operator_strategy().prop_map(|op| op.to_string()),
                Just("(".to_string()),
                Just(")".to_string())]
}

/// Reference evaluation of `n0 op0 n1 op1 n2 ...` with `*` and `/` first,
/// then `+` and `-`, each left to right.
fn evaluate_flat(numbers: &[f64], operators: &[BinaryOperator]) -> f64 {
    let mut sums = vec![numbers[0]];
    let mut additive = Vec::new();

    for (op, &value) in operators.iter().zip(&numbers[1..]) {
        match op {
            BinaryOperator::Mul | BinaryOperator::Div => {
                let last = sums.last_mut().unwrap();
                *last = op.apply(*last, value);
            },
            BinaryOperator::Add | BinaryOperator::Sub => {
                additive.push(*op);
                sums.push(value);
            },
        }
    }

    additive.iter()
            .zip(&sums[1..])
            .fold(sums[0], |acc, (op, &value)| op.apply(acc, value))
}

#[derive(Debug, Clone)]
enum Tree {
    Leaf(u32),
    Node(Box<Tree>, BinaryOperator, Box<Tree>),
}

impl Tree {
    fn source(&self) -> String {
        match self {
            Self::Leaf(n) => n.to_string(),
            Self::Node(left, op, right) => format!("({} {op} {})", left.source(), right.source()),
        }
    }

    fn value(&self) -> f64 {
        match self {
            Self::Leaf(n) => f64::from(*n),
            Self::Node(left, op, right) => op.apply(left.value(), right.value()),
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    (0_u32..50).prop_map(Tree::Leaf)
               .prop_recursive(4, 32, 2, |inner| {
                   (inner.clone(), operator_strategy(), inner)
                       .prop_map(|(l, op, r)| Tree::Node(Box::new(l), op, Box::new(r)))
               })
}

fn run_single(expression: &str) -> String {
    let lines = execute(&format!("montru {expression}"), &Config::default()).unwrap();
    assert_eq!(lines.len(), 1);
    lines[0].clone()
}

proptest! {
    #[test]
    fn tokens_survive_a_print_and_relex(atoms in prop::collection::vec(atom_strategy(), 0..30)) {
        let source = atoms.join(" ");
        let tokens: Vec<Token> = tokenize(&source).into_iter().map(|(t, _)| t).collect();

        let printed = tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        let relexed: Vec<Token> = tokenize(&printed).into_iter().map(|(t, _)| t).collect();

        prop_assert_eq!(tokens, relexed);
    }

    #[test]
    fn flat_arithmetic_respects_precedence(
        numbers in prop::collection::vec(0_u32..1000, 1..12),
        operators in prop::collection::vec(operator_strategy(), 11),
    ) {
        let numbers: Vec<f64> = numbers.into_iter().map(f64::from).collect();
        let operators = &operators[..numbers.len() - 1];

        let mut source = numbers[0].to_string();
        for (op, value) in operators.iter().zip(&numbers[1..]) {
            source.push_str(&format!(" {op} {value}"));
        }

        prop_assert_eq!(run_single(&source), evaluate_flat(&numbers, operators).to_string());
    }

    #[test]
    fn parenthesized_trees_evaluate_like_the_tree(tree in tree_strategy()) {
        prop_assert_eq!(run_single(&tree.source()), tree.value().to_string());
    }
}
