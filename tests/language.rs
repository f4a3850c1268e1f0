use std::fs;

use esperanto::{
    Error, NO_CODE_NOTICE, Outcome,
    config::{Config, StatementMode},
    error::{ParseError, RuntimeError},
    execute, run, run_with,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            match execute(&code, &Config::default()) {
                Ok(lines) => assert_eq!(lines.join("\n"),
                                        expected.trim_end(),
                                        "example {} in {:?} printed the wrong output:\n{}",
                                        i + 1,
                                        path,
                                        code),
                Err(e) => panic!("example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Pairs every ```esperanto block with the ```output block that follows it.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut current: Option<&str> = None;
    let mut buf = String::new();
    let mut pending_code: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none() {
            if trimmed.starts_with("```esperanto") {
                current = Some("code");
                buf.clear();
            } else if trimmed.starts_with("```output") {
                current = Some("output");
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match current.take() {
                Some("code") => pending_code = Some(buf.clone()),
                Some(_) => {
                    let code = pending_code.take().expect("output block without a program");
                    examples.push((code, buf.clone()));
                },
                None => {},
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Outcome::Output(lines) => assert_eq!(lines, expected, "script: {src}"),
        other => panic!("Script did not complete: {other}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Outcome::Failed(e) => e,
        other => panic!("Script succeeded but was expected to fail: {other}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_output("montru 2 + 3 * 4", &["14"]);
    assert_output("montru (2 + 3) * 4", &["20"]);
    assert_output("montru 2 * 3 + 4 * 5", &["26"]);
    assert_output("montru 2 * (3 + 4) * 5", &["70"]);
    assert_output("montru ((1))", &["1"]);
    assert_output("montru 8 / (4 - 2) / 2", &["2"]);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_output("montru 10 - 4 - 3", &["3"]);
    assert_output("montru 100 / 10 / 5", &["2"]);
    assert_output("montru 10 - 4 + 3", &["9"]);
    assert_output("montru 12 / 3 * 2", &["8"]);
}

#[test]
fn decimals_and_fractional_results() {
    assert_output("montru 0.5 + 0.25", &["0.75"]);
    assert_output("montru 7 / 2", &["3.5"]);
    assert_output("montru 1.5 * 2", &["3"]);
}

#[test]
fn variables_are_assigned_and_reassigned() {
    assert_output("x = 3\nmontru x\nx = x * 2\nmontru x", &["3", "6"]);
    assert_output("a = 1; b = a + 1; c = a + b; montru c", &["3"]);
}

#[test]
fn undeclared_identifier_is_zero() {
    assert_output("montru y + 1", &["1"]);
    assert_output("montru nenio * 5", &["0"]);
}

#[test]
fn constants_cannot_be_reassigned() {
    let err = assert_failure("konst x = 5\nx = 6\nmontru x");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::AssignmentToConstant { ref name, line: 2 })
                     if name == "x"));
}

#[test]
fn failed_runs_discard_earlier_output() {
    let outcome = run("montru 1\nkonst k = 2\nk = 3\nmontru 4");
    assert!(outcome.lines().is_none());
    assert_eq!(outcome.to_string(),
               "Error: line 3: 'k' is a constant and cannot be reassigned");
}

#[test]
fn constant_zero_is_still_protected() {
    assert_failure("konst nul = 0\nnul = 1");
}

#[test]
fn redeclaring_a_constant_overwrites_it() {
    assert_output("konst x = 1\nkonst x = 2\nmontru x", &["2"]);
}

#[test]
fn variables_shadow_constants_on_lookup() {
    assert_output("x = 1\nkonst x = 2\nmontru x", &["1"]);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_output("montru 1 / 0", &["inf"]);
    assert_output("montru (0 - 1) / 0", &["-inf"]);
    assert_output("montru 0 / 0", &["NaN"]);
}

#[test]
fn blank_input_gives_the_notice() {
    for src in ["", "   ", "\n\t\n"] {
        let outcome = run(src);
        assert!(matches!(outcome, Outcome::NoCode));
        assert!(outcome.lines().is_none());
        assert_eq!(outcome.to_string(), NO_CODE_NOTICE);
    }
}

#[test]
fn input_without_statements_prints_nothing() {
    assert_output("dum se alie", &[]);
    assert_output("1 + 2", &[]);
}

#[test]
fn unrecognized_symbols_outside_expressions_are_skipped() {
    assert_output("@ #\nmontru 3", &["3"]);
}

#[test]
fn unrecognized_symbols_inside_expressions_fail() {
    let err = assert_failure("montru 1 $ 2");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { token: "$".to_string(),
                                                          line:  1, }));
}

#[test]
fn unbalanced_parentheses_fail() {
    assert!(matches!(assert_failure("montru (1 + 2"),
                     Error::Parse(ParseError::UnclosedParen { line: 1 })));
    assert!(matches!(assert_failure("montru 1 + 2)"),
                     Error::Parse(ParseError::UnmatchedClosingParen { line: 1 })));
}

#[test]
fn malformed_operator_sequences_fail() {
    assert!(matches!(assert_failure("montru 1 +"),
                     Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(assert_failure("montru - 3"),
                     Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(assert_failure("montru 1 2"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("montru ()"),
                     Error::Parse(ParseError::MissingOperand { .. })));
}

#[test]
fn errors_report_their_line() {
    let err = assert_failure("x = 1\n\nmontru (x");
    assert_eq!(err.line(), 3);
}

#[test]
fn keywords_cannot_be_used_inside_expressions() {
    assert!(matches!(assert_failure("montru 1 + montru"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn greedy_mode_consumes_the_rest_of_the_program() {
    let config = Config::default().with_mode(StatementMode::Greedy);

    assert_eq!(execute("x = 1 +\n2", &config).ok(), Some(vec![]));
    assert!(matches!(execute("montru 1\nmontru 2", &config),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert_eq!(execute("montru 2 *\n(3 + 4)", &config).ok(),
               Some(vec!["14".to_string()]));
}

#[test]
fn step_limit_aborts_long_runs() {
    let config = Config::default().with_max_steps(Some(5));

    assert_eq!(execute("montru 1 + 2", &config).ok(), Some(vec!["3".to_string()]));
    assert!(matches!(run_with("montru 1 + 2 + 3 + 4", &config),
                     Outcome::Failed(Error::Runtime(RuntimeError::StepLimitExceeded { limit: 5,
                                                                                      line:  1, }))));

    let unlimited = Config::default().with_max_steps(None);
    let long_sum = vec!["1"; 5_000].join(" + ");
    assert_eq!(execute(&format!("montru {long_sum}"), &unlimited).ok(),
               Some(vec!["5000".to_string()]));
}
