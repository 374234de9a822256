use calq::{
    error::{Error, ParseError, RuntimeError},
    get_results,
};

fn assert_values(src: &str, expected: &[f64]) {
    let values = get_results(src).unwrap_or_else(|e| panic!("Script {src:?} failed: {e}"));
    assert_eq!(values.len(),
               expected.len(),
               "Script {src:?} produced {values:?}, expected {expected:?}");
    for (got, want) in values.iter().zip(expected) {
        let tolerance = 1e-12 * want.abs().max(1.0);
        assert!((got - want).abs() <= tolerance,
                "Script {src:?} produced {got}, expected {want}");
    }
}

fn assert_failure(src: &str) -> Error {
    match get_results(src) {
        Ok(values) => panic!("Script {src:?} succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_values("2 + 3 * 4", &[14.0]);
    assert_values("(2 + 3) * 4", &[20.0]);
    assert_values("{2 + 3} * 4", &[20.0]);
    assert_values("{(1 + 1) * 3} - 1", &[5.0]);
    assert_values("2 * 3!", &[12.0]);
    assert_values("2 ^ 3!", &[40320.0]);
}

#[test]
fn left_associativity() {
    assert_values("10 - 4 - 3", &[3.0]);
    assert_values("100 / 10 / 5", &[2.0]);
    assert_values("2 * 3 % 4", &[2.0]);
}

#[test]
fn powers_and_factorials() {
    assert_values("2^10", &[1024.0]);
    assert_values("2 ^ 0.5", &[std::f64::consts::SQRT_2]);
    assert_values("2 ^ -1", &[0.5]);
    assert_values("5!", &[120.0]);
    assert_values("0!", &[1.0]);
    assert_values("{2 + 2}!", &[24.0]);
}

#[test]
fn huge_factorials_are_infinite() {
    let values = get_results("170!; 171!; 1e16!; 9007199254740992!").unwrap();
    assert!(values[0].is_finite());
    assert!(values[1..].iter().all(|v| v.is_infinite() && v.is_sign_positive()));
}

#[test]
fn nesting_is_limited() {
    // The innermost number is an operand too.
    let inside = format!("{}1{}", "(".repeat(127), ")".repeat(127));
    assert_values(&inside, &[1.0]);
    let e = assert_failure(&format!("({inside})"));
    assert!(matches!(e, Error::Parse(ParseError::TooDeeplyNested { limit: 128, line: 1 })));
    assert!(e.is_recoverable());
}

#[test]
fn unary_operators_chain() {
    assert_values("--5", &[5.0]);
    assert_values("-+5", &[-5.0]);
    assert_values("+-+5", &[-5.0]);
    assert_values("-(2 + 3)", &[-5.0]);
    assert_values("-2 ^ 2", &[4.0]);
}

#[test]
fn modulo_truncates_toward_zero() {
    assert_values("7 % 3", &[1.0]);
    assert_values("7.9 % 2", &[1.0]);
    assert_values("-7 % 3", &[-1.0]);
    assert_values("7 % -3", &[1.0]);
}

#[test]
fn number_literals() {
    assert_values("1.5", &[1.5]);
    assert_values(".5", &[0.5]);
    assert_values("2.", &[2.0]);
    assert_values("1e3", &[1000.0]);
    assert_values("2.5E-2", &[0.025]);
}

#[test]
fn declarations_and_references() {
    assert_values("let x = 10; x * 2", &[10.0, 20.0]);
    assert_values("let rate2 = 3; rate2 * rate2", &[3.0, 9.0]);
    assert_values("let quota = 5; quota", &[5.0, 5.0]);
    assert_values("let r = 2; pi * r ^ 2", &[2.0, 4.0 * std::f64::consts::PI]);
    assert_values("e", &[std::f64::consts::E]);
}

#[test]
fn statement_sequencing() {
    assert_values("1;;;2", &[1.0, 2.0]);
    assert_values("1; 2\n3", &[1.0, 2.0, 3.0]);
    assert_values("", &[]);
    assert_values(";;", &[]);
}

#[test]
fn quit_stops_evaluation() {
    assert_values("q", &[]);
    assert_values("1; q; 2", &[1.0]);
}

#[test]
fn division_by_zero_is_error() {
    let e = assert_failure("let x = 3; x / 0");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivideByZero { line: 1 })));
    let e = assert_failure("3 % 0.5");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivideByZero { .. })));
}

#[test]
fn factorial_of_non_integer_is_error() {
    let e = assert_failure("4!; 4.5!");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExpectedInteger { value, .. }) if value == 4.5));
    let e = assert_failure("-1!");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExpectedInteger { .. })));
}

#[test]
fn modulo_of_unrepresentable_value_is_error() {
    let e = assert_failure("1e300 * 1e300 % 2");
    assert!(matches!(e, Error::Runtime(RuntimeError::NotAnInteger { .. })));
}

#[test]
fn variable_errors() {
    let e = assert_failure("let x = 1; let x = 2");
    assert!(matches!(e, Error::Runtime(RuntimeError::AlreadyDeclared { ref name, .. }) if name == "x"));
    let e = assert_failure("y + 1");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "y"));
    let e = assert_failure("let x = 1;\nlet x =\n2");
    assert!(matches!(e, Error::Runtime(RuntimeError::AlreadyDeclared { line: 2, .. })));
    let e = assert_failure("let pi = 3");
    assert!(matches!(e, Error::Runtime(RuntimeError::AlreadyDeclared { .. })));
}

#[test]
fn declaration_syntax_errors() {
    let e = assert_failure("let 5 = 3");
    assert!(matches!(e, Error::Parse(ParseError::NameExpected { .. })));
    let e = assert_failure("let x 3");
    assert!(matches!(e, Error::Parse(ParseError::AssignExpected { ref name, .. }) if name == "x"));
}

#[test]
fn delimiter_errors() {
    let e = assert_failure("(2 + 3;");
    assert!(matches!(e, Error::Parse(ParseError::UnbalancedDelimiter { expected: ')', .. })));
    let e = assert_failure("{2 + 3);");
    assert!(matches!(e, Error::Parse(ParseError::UnbalancedDelimiter { expected: '}', .. })));
    let e = assert_failure("(2 + 3");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn malformed_expressions() {
    let e = assert_failure("2 # 3");
    assert!(matches!(e, Error::Parse(ParseError::InvalidToken { ref token, .. }) if token == "#"));
    let e = assert_failure("2 +");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedEndOfInput { line: 1 })));
    let e = assert_failure("* 2");
    assert!(matches!(e, Error::Parse(ParseError::PrimaryExpected { .. })));
}

#[test]
fn exponentiation_does_not_chain() {
    // '2 ^ 3' is a complete statement; the second '^' starts the next one.
    let e = assert_failure("2 ^ 3 ^ 2");
    assert!(matches!(e, Error::Parse(ParseError::PrimaryExpected { .. })));
}

#[test]
fn error_messages_name_the_line() {
    let e = assert_failure("1;\n2;\nlet x = 1 / 0;");
    assert_eq!(e.to_string(), "Error on line 3: Division by zero.");
    assert!(e.is_recoverable());
}

#[test]
fn example_works() {
    let contents = std::fs::read_to_string("tests/example.calc").unwrap();
    let values = get_results(&contents).unwrap();
    assert_eq!(values.last().copied(), Some(15.0));
}
