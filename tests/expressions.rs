use std::fs;

use intcalc::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::parser::core::MAX_GROUPING_DEPTH,
};
use walkdir::WalkDir;

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected,
                                "Expression {src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn corpus_cases_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            if let Some(src) = line.strip_prefix('!') {
                if let Ok(value) = evaluate(src.trim()) {
                    panic!("{path:?} line {}: {src:?} succeeded with {value} but was expected to fail",
                           i + 1);
                }
                continue;
            }

            let Some((src, expected)) = line.rsplit_once('=') else {
                panic!("{path:?} line {}: Malformed case: {line:?}", i + 1);
            };
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| {
                                       panic!("{path:?} line {}: Bad expectation: {e}", i + 1)
                                   });
            match evaluate(src.trim()) {
                Ok(value) => assert_eq!(value, expected,
                                        "{path:?} line {}: {src:?} evaluated to {value}, expected {expected}",
                                        i + 1),
                Err(e) => panic!("{path:?} line {}: {src:?} failed: {e}", i + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1+2*3", 7);
    assert_value("2*3+1", 7);
    assert_value("(1+2)*3", 9);
    assert_value("10-4/2", 8);
}

#[test]
fn operators_fold_left_associatively() {
    assert_value("10-2-3", 5);
    assert_value("100/10/2", 5);
    assert_value("1-2+3", 2);
    assert_value("8/4*2", 4);
}

#[test]
fn groups_nest() {
    assert_value("((2+3)*(4-1))", 15);
    assert_value("(((((7)))))", 7);
    assert_value("2*(3+(4*(5-3)))", 22);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1 +  2", 3);
    assert_value("\t( 1 + 2 ) *\t3", 9);
    assert_value("12  *12", 144);
}

#[test]
fn literals_round_trip() {
    for n in [0, 1, 9, 10, 42, 7_305_812, i64::MAX] {
        assert_value(&n.to_string(), n);
    }
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("(0-7)/2", -3);
    assert_value("1/2", 0);
}

#[test]
fn division_by_zero_is_reported() {
    let error = assert_failure("5/0");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { column: 2 })),
            "Unexpected error: {error:?}");

    // The check happens on the evaluated right operand, not the literal.
    let error = assert_failure("5/(3-3)");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { .. })),
            "Unexpected error: {error:?}");
}

#[test]
fn unknown_characters_are_rejected() {
    let error = assert_failure("3+@2");
    assert!(matches!(error,
                     Error::Lex(LexError::UnexpectedCharacter { ch: '@', column: 3 })),
            "Unexpected error: {error:?}");

    let error = assert_failure("1 + $");
    assert!(matches!(error,
                     Error::Lex(LexError::UnexpectedCharacter { ch: '$', column: 5 })),
            "Unexpected error: {error:?}");
}

#[test]
fn unterminated_groups_are_rejected() {
    let error = assert_failure("(1+2");
    assert!(matches!(error,
                     Error::Parse(ParseError::ExpectedClosingParen { column: 1 })),
            "Unexpected error: {error:?}");

    // The reported column belongs to the unmatched opening parenthesis.
    let error = assert_failure("12*(4+5");
    assert!(matches!(error,
                     Error::Parse(ParseError::ExpectedClosingParen { column: 4 })),
            "Unexpected error: {error:?}");
}

#[test]
fn unary_minus_is_not_part_of_the_grammar() {
    let error = assert_failure("-5");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })),
            "Unexpected error: {error:?}");

    let error = assert_failure("3*-2");
    assert!(matches!(error,
                     Error::Parse(ParseError::UnexpectedToken { ref token, column: 3 }) if token.as_str() == "-"),
            "Unexpected error: {error:?}");
}

#[test]
fn exhausted_input_is_rejected() {
    let error = assert_failure("");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedEndOfInput)),
            "Unexpected error: {error:?}");

    let error = assert_failure("1+");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedEndOfInput)),
            "Unexpected error: {error:?}");
}

#[test]
fn trailing_tokens_are_rejected() {
    let error = assert_failure("1 2");
    assert!(matches!(error,
                     Error::Parse(ParseError::UnexpectedTrailingTokens { ref token, column: 3 }) if token.as_str() == "2"),
            "Unexpected error: {error:?}");

    let error = assert_failure("(1+2))");
    assert!(matches!(error,
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })),
            "Unexpected error: {error:?}");
}

#[test]
fn oversized_literals_are_rejected() {
    // One past i64::MAX.
    let error = assert_failure("9223372036854775808");
    assert!(matches!(error, Error::Parse(ParseError::LiteralTooLarge { column: 1 })),
            "Unexpected error: {error:?}");

    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn grouping_depth_is_bounded() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_GROUPING_DEPTH), 1);

    let error = assert_failure(&nested(MAX_GROUPING_DEPTH + 1));
    assert!(matches!(error, Error::Parse(ParseError::GroupingTooDeep { .. })),
            "Unexpected error: {error:?}");
}

#[test]
fn long_operator_chains_evaluate() {
    let terms = 50_000;

    let mut src = String::from("0");
    for _ in 0..terms {
        src.push_str("+1");
    }
    assert_value(&src, terms);

    let mut src = String::from("1");
    for _ in 0..terms {
        src.push_str("*1");
    }
    assert_value(&src, 1);
}
