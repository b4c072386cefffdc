//! Algebraic properties of the arithmetic unit.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use qf_01_arithmetic::{ArithmeticApi, OperationRequest};

    use super::super::calculator;

    proptest! {
        #[test]
        fn add_is_commutative(x in -1e12f64..1e12, y in -1e12f64..1e12) {
            let calc = calculator();
            prop_assert_eq!(calc.add(x, y), calc.add(y, x));
        }
    }

    proptest! {
        #[test]
        fn subtract_is_antisymmetric(x in -1e12f64..1e12, y in -1e12f64..1e12) {
            let calc = calculator();
            prop_assert_eq!(calc.subtract(x, y), -calc.subtract(y, x));
        }
    }

    proptest! {
        #[test]
        fn divide_by_zero_is_non_finite(x in proptest::num::f64::ANY) {
            let result = calculator().divide(x, 0.0);
            prop_assert!(result.is_infinite() || result.is_nan());
        }
    }

    proptest! {
        /// Any kind other than "special" yields no result, whatever the numbers.
        #[test]
        fn non_special_kind_is_none(
            kind in "[a-z]{0,12}",
            value in proptest::option::of(-1e6f64..1e6),
            multiplier in proptest::option::of(-1e6f64..1e6),
        ) {
            prop_assume!(kind != "special");
            let request = OperationRequest { kind: Some(kind), value, multiplier };
            prop_assert_eq!(calculator().derive_from_request(Some(&request)), None);
        }
    }

    proptest! {
        /// Positive values are scaled by a non-zero multiplier, or returned as is.
        #[test]
        fn special_kind_with_positive_value(
            value in 1e-6f64..1e6,
            multiplier in proptest::option::of(-1e6f64..1e6),
        ) {
            let request = OperationRequest {
                kind: Some("special".to_string()),
                value: Some(value),
                multiplier,
            };
            let expected = match multiplier {
                Some(m) if m != 0.0 => value * m,
                _ => value,
            };
            prop_assert_eq!(calculator().derive_from_request(Some(&request)), Some(expected));
        }
    }

    proptest! {
        #[test]
        fn fixed_success_token_ignores_arithmetic(x in any::<f64>(), y in any::<f64>()) {
            let calc = calculator();
            let _ = calc.divide(x, y);
            prop_assert_eq!(calc.fixed_success_token(), "success");
        }
    }
}
