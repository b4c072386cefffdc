//! # Test-Authoring Samples
//!
//! Samples graded by the external test-quality analyzer. The first three are
//! the poor patterns it must flag; the last one is the reference it must
//! accept. Keep names and shapes as they are.
//!
//! | Test | Pattern |
//! |------|---------|
//! | `test1` | Meaningless name |
//! | `should_work` | Tautological assertion |
//! | `complex_test` | No arrange/act/assert structure |
//! | `should_add_two_numbers_correctly` | Given/when/then, descriptive name |

#[cfg(test)]
mod tests {
    use qf_01_arithmetic::{ArithmeticApi, OperationRequest};

    use super::super::calculator;

    #[test]
    fn test1() {
        assert_eq!(calculator().add(2.0, 3.0), 5.0);
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn should_work() {
        assert!(true);
    }

    #[test]
    fn complex_test() {
        let result = calculator().derive_from_request(Some(
            &OperationRequest::of_kind("special").with_value(10.0).with_multiplier(2.0),
        ));
        assert_eq!(result, Some(20.0));
    }

    #[test]
    fn should_add_two_numbers_correctly() {
        // Given
        let calc = calculator();
        let first_number = 5.0;
        let second_number = 3.0;

        // When
        let result = calc.add(first_number, second_number);

        // Then
        assert_eq!(result, 8.0);
    }
}
