// tests/expression_tests.rs
//
// Expression trees read from JSON and evaluated on each backend.

use naturalnum::backends::{BigUintBackend, DigitList, DigitString, DigitVec};
use naturalnum::core::{NaturalNumber, NaturalNumberError, NaturalNumberKernel};
use naturalnum::expression::{evaluate, EvaluationError, Expression};

fn parse(json: &str) -> Expression {
    Expression::from_json(json).unwrap()
}

macro_rules! expression_suite {
    ($($module:ident: $backend:ty),* $(,)?) => {
        $(
            mod $module {
                use super::*;

                type N = $backend;

                #[test]
                fn evaluates_nested_json() {
                    // ((2 + 3) * 40) / 7 - 1
                    let e = parse(r#"{
                        "op": "minus",
                        "left": {
                            "op": "divide",
                            "left": {
                                "op": "times",
                                "left": {"op": "plus",
                                         "left": {"op": "number", "value": "2"},
                                         "right": {"op": "number", "value": "3"}},
                                "right": {"op": "number", "value": "40"}
                            },
                            "right": {"op": "number", "value": "7"}
                        },
                        "right": {"op": "number", "value": "1"}
                    }"#);
                    let value: N = evaluate(&e).unwrap();
                    assert_eq!(value.to_decimal(), "27");
                }

                #[test]
                fn large_literals() {
                    let e = Expression::times(
                        Expression::literal("99999999999999999999"),
                        Expression::literal("99999999999999999999"),
                    );
                    let value: N = evaluate(&e).unwrap();
                    assert_eq!(value.to_decimal(), "9999999999999999999800000000000000000001");
                }

                #[test]
                fn minus_to_zero_is_fine() {
                    let e = Expression::minus(Expression::number(8), Expression::number(8));
                    assert!(evaluate::<N>(&e).unwrap().is_zero());
                }

                #[test]
                fn negative_result_is_reported() {
                    let e = Expression::minus(
                        Expression::number(5),
                        Expression::times(Expression::number(2), Expression::number(3)),
                    );
                    let err = evaluate::<N>(&e).unwrap_err();
                    assert_eq!(
                        err,
                        EvaluationError::NegativeResult { left: "5".to_string(), right: "6".to_string() }
                    );
                    assert_eq!(err.to_string(), "Negative natural number error: 5 - 6");
                }

                #[test]
                fn divide_by_zero_is_reported() {
                    let e = parse(r#"{"op":"divide","left":{"op":"number","value":"4"},"right":{"op":"number","value":"0"}}"#);
                    let err = evaluate::<N>(&e).unwrap_err();
                    assert_eq!(err, EvaluationError::DivideByZero);
                    assert_eq!(err.to_string(), "Divide by 0 error.");
                }

                #[test]
                fn malformed_literal_is_reported() {
                    let e = Expression::plus(Expression::number(1), Expression::literal("-3"));
                    assert_eq!(
                        evaluate::<N>(&e),
                        Err(EvaluationError::InvalidLiteral(NaturalNumberError::MalformedDecimal("-3".to_string())))
                    );
                }
            }
        )*
    };
}

expression_suite! {
    digit_string: DigitString,
    digit_vec: DigitVec,
    digit_list: DigitList,
    big_uint: BigUintBackend,
}

#[test]
fn rejects_unknown_operators() {
    assert!(Expression::from_json(r#"{"op":"modulo","left":{"op":"number","value":"1"},"right":{"op":"number","value":"1"}}"#).is_err());
    assert!(Expression::from_json(r#"{"op":"number"}"#).is_err());
}

#[test]
fn json_round_trip_preserves_shape() {
    let e = Expression::divide(
        Expression::plus(Expression::number(1), Expression::number(2)),
        Expression::literal("3"),
    );
    let text = serde_json::to_string(&e).unwrap();
    assert_eq!(Expression::from_json(&text).unwrap(), e);
    assert_eq!(e.label(), "divide");
}
