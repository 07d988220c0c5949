use super::*;
use lunula_diagnostic::ErrorCode;
use proptest::prelude::*;

use crate::format_number;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(op: Operator, lhs: Value, rhs: Value) -> Result<Value, OperatorError> {
    evaluate(op, &lhs, Some(&rhs))
}

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(binary(Operator::Add, num(1.0), num(2.0)), Ok(num(3.0)));
    assert_eq!(binary(Operator::Sub, num(1.0), num(2.0)), Ok(num(-1.0)));
    assert_eq!(binary(Operator::Mul, num(3.0), num(4.0)), Ok(num(12.0)));
    assert_eq!(binary(Operator::Div, num(1.0), num(4.0)), Ok(num(0.25)));
    assert_eq!(binary(Operator::Mod, num(7.0), num(3.0)), Ok(num(1.0)));
    assert_eq!(binary(Operator::Pow, num(2.0), num(10.0)), Ok(num(1024.0)));
}

#[test]
fn division_by_zero_is_infinite() {
    assert_eq!(
        binary(Operator::Div, num(1.0), num(0.0)),
        Ok(num(f64::INFINITY))
    );
}

#[test]
fn modulo_keeps_sign_of_dividend() {
    assert_eq!(binary(Operator::Mod, num(-7.0), num(3.0)), Ok(num(-1.0)));
    assert_eq!(binary(Operator::Mod, num(5.5), num(2.0)), Ok(num(1.5)));
}

#[test]
fn negation() {
    assert_eq!(evaluate(Operator::Sub, &num(2.0), None), Ok(num(-2.0)));
    assert_eq!(
        evaluate(Operator::Sub, &Value::string("3"), None),
        Ok(num(-3.0))
    );
    assert_eq!(
        evaluate(Operator::Sub, &Value::Nil, None),
        Err(OperatorError::NonNumber)
    );
}

#[test]
fn numeric_strings_are_coerced() {
    assert_eq!(
        binary(Operator::Add, Value::string("10"), num(1.0)),
        Ok(num(11.0))
    );
    assert_eq!(
        binary(Operator::Mul, Value::string(" 2 "), Value::string("0x10")),
        Ok(num(32.0))
    );
}

#[test]
fn arithmetic_errors() {
    assert_eq!(
        binary(Operator::Add, Value::string("ten"), num(1.0)),
        Err(OperatorError::UnconvertibleString)
    );
    assert_eq!(
        binary(Operator::Add, Value::Boolean(true), num(1.0)),
        Err(OperatorError::NonNumber)
    );
    assert_eq!(
        binary(Operator::Pow, num(1.0), Value::Nil),
        Err(OperatorError::NonNumber)
    );
    // the left operand is checked first
    assert_eq!(
        binary(Operator::Sub, Value::Nil, Value::string("x")),
        Err(OperatorError::NonNumber)
    );
}

#[test]
fn concatenation() {
    assert_eq!(
        binary(Operator::Concat, Value::string("ab"), Value::string("cd")),
        Ok(Value::string("abcd"))
    );
    assert_eq!(
        binary(Operator::Concat, num(3.0), Value::string("x")),
        Ok(Value::string("3x"))
    );
    assert_eq!(
        binary(Operator::Concat, num(0.5), num(1e100)),
        Ok(Value::string("0.51e+100"))
    );
    assert_eq!(
        binary(Operator::Concat, Value::string("a"), Value::Nil),
        Err(OperatorError::NonString)
    );
}

#[test]
fn length_needs_a_string() {
    assert_eq!(
        evaluate(Operator::Len, &Value::string("hello"), None),
        Ok(num(5.0))
    );
    assert_eq!(
        evaluate(Operator::Len, &Value::string("h\u{e9}"), None),
        Ok(num(3.0))
    );
    assert_eq!(
        evaluate(Operator::Len, &num(5.0), None),
        Err(OperatorError::NonString)
    );
}

#[test]
fn equality_never_fails() {
    let eq = |a: Value, b: Value| binary(Operator::Eq, a, b).unwrap();
    assert_eq!(eq(num(1.0), num(1.0)), Value::Boolean(true));
    assert_eq!(eq(num(1.0), Value::string("1")), Value::Boolean(false));
    assert_eq!(eq(Value::Nil, Value::Nil), Value::Boolean(true));
    assert_eq!(
        eq(Value::Boolean(true), Value::Boolean(false)),
        Value::Boolean(false)
    );
    assert_eq!(
        eq(Value::Boolean(false), Value::Boolean(false)),
        Value::Boolean(true)
    );
    assert_eq!(eq(Value::Table, Value::Table), Value::Boolean(true));
    assert_eq!(eq(num(f64::NAN), num(f64::NAN)), Value::Boolean(false));
    assert_eq!(
        binary(Operator::NotEq, Value::string("a"), Value::string("b")),
        Ok(Value::Boolean(true))
    );
}

#[test]
fn ordering_of_numbers_and_strings() {
    assert_eq!(binary(Operator::Lt, num(1.0), num(2.0)), Ok(true.into()));
    assert_eq!(binary(Operator::LtEq, num(2.0), num(2.0)), Ok(true.into()));
    assert_eq!(binary(Operator::Gt, num(1.0), num(2.0)), Ok(false.into()));
    assert_eq!(binary(Operator::GtEq, num(3.0), num(2.0)), Ok(true.into()));
    assert_eq!(
        binary(Operator::Lt, Value::string("Z"), Value::string("a")),
        Ok(true.into())
    );
    assert_eq!(
        binary(Operator::Lt, Value::string("ab"), Value::string("abc")),
        Ok(true.into())
    );
}

#[test]
fn nan_is_unordered() {
    for op in [Operator::Lt, Operator::LtEq, Operator::Gt, Operator::GtEq] {
        assert_eq!(binary(op, num(f64::NAN), num(1.0)), Ok(false.into()));
    }
}

#[test]
fn ordering_errors() {
    assert_eq!(
        binary(Operator::Lt, num(1.0), Value::string("2")),
        Err(OperatorError::DifferentTypes)
    );
    assert_eq!(
        binary(Operator::Lt, Value::Boolean(true), Value::Boolean(false)),
        Err(OperatorError::NotComparable)
    );
    assert_eq!(
        binary(Operator::GtEq, Value::Nil, Value::Nil),
        Err(OperatorError::NotComparable)
    );
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(binary(Operator::And, Value::Nil, num(1.0)), Ok(Value::Nil));
    assert_eq!(binary(Operator::And, num(0.0), num(1.0)), Ok(num(1.0)));
    assert_eq!(
        binary(Operator::Or, Value::Boolean(false), Value::string("x")),
        Ok(Value::string("x"))
    );
    assert_eq!(binary(Operator::Or, num(2.0), num(3.0)), Ok(num(2.0)));
    assert_eq!(evaluate(Operator::Not, &Value::Nil, None), Ok(true.into()));
    assert_eq!(evaluate(Operator::Not, &num(0.0), None), Ok(false.into()));
}

#[test]
fn invalid_is_contagious_without_error() {
    for op in [
        Operator::Add,
        Operator::Concat,
        Operator::Eq,
        Operator::NotEq,
        Operator::Lt,
        Operator::And,
        Operator::Or,
    ] {
        assert_eq!(binary(op, Value::Invalid, Value::Invalid), Ok(Value::Invalid));
        assert_eq!(binary(op, Value::Nil, Value::Invalid), Ok(Value::Invalid));
    }
    assert_eq!(evaluate(Operator::Not, &Value::Invalid, None), Ok(Value::Invalid));
    assert_eq!(evaluate(Operator::Len, &Value::Invalid, None), Ok(Value::Invalid));
}

#[test]
fn binary_operator_without_operand() {
    assert_eq!(
        evaluate(Operator::Add, &num(1.0), None),
        Err(OperatorError::MissingOperand(Operator::Add))
    );
    let error = evaluate(Operator::Concat, &num(1.0), None).unwrap_err();
    assert_eq!(error.code(), ErrorCode::E9004);
    assert!(error.code().is_fatal());
}

#[test]
fn operator_symbols() {
    assert_eq!(Operator::NotEq.to_string(), "~=");
    assert_eq!(Operator::Concat.to_string(), "..");
    assert!(Operator::Len.is_unary());
    assert!(!Operator::Sub.is_unary());
}

proptest! {
    #[test]
    fn arithmetic_matches_ieee(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        let laws: [(Operator, f64); 5] = [
            (Operator::Add, a + b),
            (Operator::Sub, a - b),
            (Operator::Mul, a * b),
            (Operator::Div, a / b),
            (Operator::Mod, a % b),
        ];
        for (op, expected) in laws {
            match binary(op, num(a), num(b)) {
                Ok(Value::Number(n)) => {
                    prop_assert!(n.to_bits() == expected.to_bits(), "{op}: {n} != {expected}");
                }
                other => prop_assert!(false, "{op}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn power_matches_powf(a in 0.0f64..100.0, b in -4.0f64..4.0) {
        prop_assert_eq!(binary(Operator::Pow, num(a), num(b)), Ok(num(a.powf(b))));
    }

    #[test]
    fn integer_strings_coerce_like_numbers(a in -100_000i32..100_000, b in -100_000i32..100_000) {
        let (a, b) = (f64::from(a), f64::from(b));
        let from_strings = binary(Operator::Add, Value::string(format_number(a)), Value::string(format_number(b)));
        prop_assert_eq!(from_strings, Ok(num(a + b)));
    }
}
