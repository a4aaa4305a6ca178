use calcchain::{CalcError, Calculator, DIVISION_EPSILON, Operation, add, divide, multiply, subtract};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

fn divisor() -> impl Strategy<Value = f64> {
    prop_oneof![1e-10f64..1e12f64, -1e12f64..=-1e-10f64]
}

fn near_zero() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(-0.0), -9.9e-11f64..9.9e-11f64]
}

proptest! {
    #[test]
    fn primitives_match_ieee_arithmetic(a in finite(), b in finite()) {
        prop_assert_eq!(add(a, b), a + b);
        prop_assert_eq!(subtract(a, b), a - b);
        prop_assert_eq!(multiply(a, b), a * b);
    }

    #[test]
    fn divide_matches_ieee_above_threshold(a in finite(), b in divisor()) {
        prop_assert!(b.abs() >= DIVISION_EPSILON);
        prop_assert_eq!(divide(a, b).unwrap(), a / b);
    }

    #[test]
    fn divide_rejects_near_zero(a in finite(), b in near_zero()) {
        prop_assert!(matches!(divide(a, b), Err(CalcError::InvalidArgument(_))));

        let mut calc = Calculator::new(a);
        prop_assert!(calc.divide(b).is_err());
        prop_assert_eq!(calc.value().to_bits(), a.to_bits());
    }

    #[test]
    fn chaining_matches_sequential_primitives(
        x in finite(),
        a in finite(),
        b in finite(),
        c in finite(),
    ) {
        let mut calc = Calculator::new(x);
        calc.add(a).subtract(b).multiply(c);
        prop_assert_eq!(calc.value(), ((x + a) - b) * c);
    }

    #[test]
    fn reset_always_yields_zero(x in any::<f64>(), a in finite()) {
        let mut calc = Calculator::new(x);
        calc.add(a).reset();
        prop_assert_eq!(calc.value(), 0.0);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(v1 in finite(), v2 in finite()) {
        prop_assert!(Calculator::new(v1) == Calculator::new(v1));

        let forward = Calculator::new(v1) == Calculator::new(v2);
        let backward = Calculator::new(v2) == Calculator::new(v1);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, (v1 - v2).abs() < 1e-9);
        prop_assert_eq!(Calculator::new(v1) != Calculator::new(v2), !forward);
    }

    #[test]
    fn equality_tracks_epsilon_boundary(v1 in -1e3f64..1e3f64, d in -2e-9f64..2e-9f64) {
        let v2 = v1 + d;
        let expected = (v1 - v2).abs() < 1e-9;

        prop_assert_eq!(Calculator::new(v1) == Calculator::new(v2), expected);
        prop_assert_eq!(Calculator::new(v2) == Calculator::new(v1), expected);
        prop_assert_eq!(Calculator::new(v1) != Calculator::new(v2), !expected);
    }

    #[test]
    fn apply_agrees_with_operation(x in finite(), v in divisor()) {
        for op in Operation::ALL {
            let mut calc = Calculator::new(x);
            calc.apply(op, v).unwrap();
            prop_assert_eq!(calc.value(), op.apply(x, v).unwrap());
        }
    }
}

#[test]
fn test_end_to_end_chain() {
    let value = Calculator::new(10.0)
        .add(5.0)
        .multiply(2.0)
        .subtract(3.0)
        .value();
    assert_eq!(value, 27.0);
}

#[test]
fn test_end_to_end_failed_division() {
    let mut calc = Calculator::new(10.0);
    let err = calc.divide(0.0).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero is not allowed");
    assert_eq!(calc.value(), 10.0);
}

#[test]
fn test_end_to_end_sum() {
    assert!((add(15.5, 7.2) - 22.7).abs() < 1e-9);
}

#[test]
fn test_to_string_round_trip_format() {
    let calc = Calculator::new(3.14159);
    assert_eq!(calc.to_string_with_precision(2), "3.14");
    assert_eq!(calc.to_string_with_precision(5), "3.14159");
    assert_eq!(calc.to_string(), "3.14");
}

#[test]
fn test_equality_either_side_of_epsilon() {
    assert_eq!(Calculator::new(1.0), Calculator::new(1.0 + 0.9e-9));
    assert_ne!(Calculator::new(1.0), Calculator::new(1.0 + 1.1e-9));
    assert_ne!(Calculator::new(-1.0), Calculator::new(-1.0 - 1.1e-9));
}

#[test]
fn test_equality_limitation_at_large_magnitude() {
    // Absolute epsilon: neighbours at 1e12 are ~1.2e-4 apart and compare unequal
    let big: f64 = 1e12;
    let next = f64::from_bits(big.to_bits() + 1);
    assert_ne!(Calculator::new(big), Calculator::new(next));
}
