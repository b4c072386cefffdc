//! Numeric and request edge cases of the arithmetic unit.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fixture_telemetry::{AmbientFlags, RecordingSink};
    use qf_01_arithmetic::{ArithmeticApi, Calculator, OperationRequest, DEBUG_MODE_MESSAGE};

    use super::super::calculator;

    fn derive(request: Option<&OperationRequest>) -> Option<f64> {
        calculator().derive_from_request(request)
    }

    // =========================================================================
    // Numeric edge cases
    // =========================================================================

    #[test]
    fn division_by_zero_never_faults() {
        let calc = calculator();
        assert_eq!(calc.divide(7.0, 0.0), f64::INFINITY);
        assert_eq!(calc.divide(-7.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(calc.divide(7.0, -0.0), f64::NEG_INFINITY);
        assert!(calc.divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn square_root_of_negative_is_nan() {
        let calc = calculator();
        assert!(calc.square_root(-9.0).is_nan());
        assert_eq!(calc.square_root(9.0), 3.0);
    }

    #[test]
    fn modulo_uses_truncated_division() {
        let calc = calculator();
        assert_eq!(calc.modulo(10.0, 3.0), 1.0);
        assert_eq!(calc.modulo(-10.0, 3.0), -1.0);
        assert_eq!(calc.modulo(5.5, 2.0), 1.5);
    }

    #[test]
    fn remaining_operations_produce_expected_values() {
        let calc = calculator();
        assert_eq!(calc.subtract(10.0, 4.0), 6.0);
        assert_eq!(calc.multiply(-3.0, 4.0), -12.0);
        assert_eq!(calc.power(3.0, 3.0), 27.0);
        assert_eq!(calc.power(2.0, -1.0), 0.5);
    }

    // =========================================================================
    // Derived computation
    // =========================================================================

    #[test]
    fn derive_without_request_is_none() {
        assert_eq!(derive(None), None);
    }

    #[test]
    fn derive_with_other_kind_is_none() {
        assert_eq!(derive(Some(&OperationRequest::of_kind("other"))), None);
    }

    #[test]
    fn derive_with_zero_multiplier_returns_value() {
        let request = OperationRequest::of_kind("special")
            .with_value(10.0)
            .with_multiplier(0.0);
        assert_eq!(derive(Some(&request)), Some(10.0));
    }

    #[test]
    fn derive_with_negative_value_is_zero() {
        let request = OperationRequest::of_kind("special").with_value(-5.0);
        assert_eq!(derive(Some(&request)), Some(0.0));
    }

    #[test]
    fn derive_from_untyped_documents() {
        let request = OperationRequest::parse(r#"{"type":"special","value":10,"multiplier":0}"#)
            .unwrap();
        assert_eq!(derive(request.as_ref()), Some(10.0));

        let request = OperationRequest::parse("null").unwrap();
        assert_eq!(derive(request.as_ref()), None);
    }

    // =========================================================================
    // Fixed responses and ambient flags
    // =========================================================================

    #[test]
    fn fixed_success_token_is_constant() {
        let calc = calculator();
        for _ in 0..1000 {
            assert_eq!(calc.fixed_success_token(), "success");
        }
    }

    #[test]
    fn debug_flag_controls_diagnostic() {
        let sink = Arc::new(RecordingSink::new());
        let quiet = Calculator::new().with_sink(sink.clone());
        assert!(!quiet.debug_flag_enabled());
        assert!(sink.is_empty());

        let loud = Calculator::new()
            .with_flags(AmbientFlags::default().with_debug(true))
            .with_sink(sink.clone());
        assert!(loud.debug_flag_enabled());
        assert_eq!(sink.records()[0].message, DEBUG_MODE_MESSAGE);
    }

    #[test]
    fn pending_work_returns_unit() {
        calculator().pending_work();
    }
}
