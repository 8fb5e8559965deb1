use configvars::literal::{parse_assignment, parse_literal, Literal};
use configvars::{ConfigvarsError, VariableSet};

#[test]
fn integer_assignments() {
    for (line, name, value) in [
        ("PIN = 9858", "PIN", 9858),
        ("NEGATIVE_INT = -9858", "NEGATIVE_INT", -9858),
        ("PLUS=+12", "PLUS", 12),
        ("_zero = 0", "_zero", 0),
        ("LEADING = 007", "LEADING", 7),
    ] {
        let parsed = parse_assignment(line).unwrap_or_else(|e| panic!("{line}: {e}"));
        assert_eq!(parsed, (name.to_string(), Literal::Int(value.into())), "{line}");
    }
}

#[test]
fn float_assignments() {
    for (line, value) in [
        ("F = .98", 0.98),
        ("F = 0.98", 0.98),
        ("F = 5.", 5.0),
        ("F = 40e8", 4000000000.0),
        ("F = 2E-5", 2e-05),
        ("F = -2E-5", -2e-05),
        ("F = +1.5", 1.5),
    ] {
        let (name, literal) = parse_assignment(line).unwrap_or_else(|e| panic!("{line}: {e}"));
        assert_eq!(name, "F");
        assert_eq!(literal, Literal::Float(value), "{line}");
    }
}

#[test]
fn quoted_strings_lose_their_outer_quotes() {
    assert_eq!(
        parse_assignment("SECRET='opiuasf'").unwrap(),
        ("SECRET".to_string(), Literal::Str("opiuasf".to_string()))
    );
    assert_eq!(
        parse_assignment("MAIL = \"user@example.com\"").unwrap().1,
        Literal::Str("user@example.com".to_string())
    );
    // inner quotes and '=' are kept as is
    assert_eq!(
        parse_assignment("Q = 'it''s = fine'").unwrap().1,
        Literal::Str("it''s = fine".to_string())
    );
    assert_eq!(parse_assignment("EMPTY = ''").unwrap().1, Literal::Str(String::new()));
}

#[test]
fn quoted_literal_may_span_lines() {
    assert_eq!(
        parse_literal("'first\nsecond'").unwrap(),
        Literal::Str("first\nsecond".to_string())
    );
}

#[test]
fn malformed_lines_are_syntax_errors() {
    for line in ["bad line", "", "1ABC = 5", "A  = 5", "= 5", "A-B = 1", "A =", "A = 1\n2"] {
        let err = parse_assignment(line).unwrap_err();
        assert!(matches!(err, ConfigvarsError::Syntax { .. }), "{line:?} gave {err}");
    }
}

#[test]
fn unknown_literals_are_type_errors() {
    for line in ["A = abc", "A = true", "A = 'unterminated", "A = \"mixed'", "A = 1.5e3", "A = 'x' ", "A = "] {
        let err = parse_assignment(line).unwrap_err();
        match err {
            ConfigvarsError::LiteralType { allowed, .. } => assert_eq!(allowed, "int, float, str"),
            other => panic!("{line:?} gave {other}"),
        }
    }
}

#[test]
fn repeated_equals_signs_are_stripped() {
    assert_eq!(parse_assignment("A = =5").unwrap().1, Literal::Int(5.into()));
}

#[test]
fn integers_keep_every_digit() {
    let (_, big) = parse_assignment("BIG = 99999999999999999999").unwrap();
    assert_eq!(big.to_string(), "99999999999999999999");
    assert_eq!(serde_json::Value::from(big).to_string(), "99999999999999999999");

    let (_, negative) = parse_assignment("NEG = -000123456789012345678901234567890").unwrap();
    assert_eq!(negative.to_string(), "-123456789012345678901234567890");
    assert_eq!(parse_literal("-000").unwrap(), Literal::Int(0.into()));
    assert_eq!(parse_literal("+42").unwrap().to_string(), "42");
}

#[test]
fn overflowing_floats_are_out_of_range() {
    let err = parse_assignment("HUGE = 1e999").unwrap_err();
    assert!(matches!(err, ConfigvarsError::OutOfRange { type_name: "float", .. }));
}

#[test]
fn literal_display_and_type_names() {
    assert_eq!(Literal::Int((-3).into()).to_string(), "-3");
    assert_eq!(Literal::Float(5.0).to_string(), "5.0");
    assert_eq!(Literal::Str("x y".into()).to_string(), "x y");
    assert_eq!(Literal::Int(1.into()).type_name(), "int");
    assert_eq!(Literal::Float(1.0).type_name(), "float");
    assert_eq!(Literal::Str("".into()).type_name(), "str");
}

#[test]
fn variable_set_keeps_first_position_on_reassignment() {
    let mut vars = VariableSet::new();
    vars.assign("A = 1").unwrap();
    vars.assign("B = 'two'").unwrap();
    vars.assign("A = 3.5").unwrap();
    assert_eq!(vars.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(vars.get("A"), Some(&serde_json::json!(3.5)));
    assert_eq!(vars.len(), 2);
    assert!(vars.assign("nope").is_err());
    assert_eq!(vars.len(), 2);
}
