// File: src/validator.rs
// Purpose: Range checks applied before any table is generated

use serde::Serialize;
use thiserror::Error;

use crate::range::{Axis, RangeInput};

/// Largest absolute value accepted for any bound
pub const MAX_MAGNITUDE: u64 = 999;

/// Largest accepted difference between an axis' end and start
pub const MAX_SPAN: u64 = 25;

/// Why a `RangeInput` was rejected. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationError {
    #[error("End values cannot be less than start values! Use the form to enter new values.")]
    Order,

    #[error("Values cannot be greater than 999! Use the form to enter new values.")]
    Magnitude,

    #[error("Values cannot differ by more than 25! Use the form to enter new values.")]
    Span,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Order => "order",
            ValidationError::Magnitude => "magnitude",
            ValidationError::Span => "span",
        }
    }
}

/// Check a parsed input against the ordering, magnitude and span rules,
/// stopping at the first failure.
///
/// This is the backstop for input that did not come through the form (for
/// example a query string), so its magnitude bound is looser than the form's.
pub fn validate(input: &RangeInput) -> Result<(), ValidationError> {
    if input.row_end < input.row_start || input.col_end < input.col_start {
        return Err(ValidationError::Order);
    }

    if input.values().iter().any(|v| v.unsigned_abs() > MAX_MAGNITUDE) {
        return Err(ValidationError::Magnitude);
    }

    if input.span(Axis::Row) > MAX_SPAN || input.span(Axis::Column) > MAX_SPAN {
        return Err(ValidationError::Span);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RangeInput::new(1, 3, 1, 3))]
    #[case(RangeInput::new(-999, -974, 974, 999))]
    #[case(RangeInput::new(0, 0, 0, 0))]
    #[case(RangeInput::new(1, 26, -5, 20))]
    fn test_valid_inputs(#[case] input: RangeInput) {
        assert_eq!(validate(&input), Ok(()));
    }

    #[rstest]
    #[case(RangeInput::new(5, 2, 1, 1))]
    #[case(RangeInput::new(1, 1, 3, 2))]
    // ordering wins even when magnitude and span are also broken
    #[case(RangeInput::new(5000, -5000, 1, 1))]
    fn test_order_error(#[case] input: RangeInput) {
        assert_eq!(validate(&input), Err(ValidationError::Order));
    }

    #[rstest]
    #[case(RangeInput::new(1, 1000, 1, 1))]
    #[case(RangeInput::new(-1000, -990, 1, 1))]
    #[case(RangeInput::new(1, 1, 1000, 1001))]
    fn test_magnitude_error(#[case] input: RangeInput) {
        assert_eq!(validate(&input), Err(ValidationError::Magnitude));
    }

    #[rstest]
    #[case(RangeInput::new(1, 30, 1, 1))]
    #[case(RangeInput::new(1, 1, -13, 13))]
    fn test_span_error(#[case] input: RangeInput) {
        assert_eq!(validate(&input), Err(ValidationError::Span));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let input = RangeInput::new(i64::MIN, i64::MAX, 0, 0);
        assert_eq!(validate(&input), Err(ValidationError::Magnitude));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Span.to_string(),
            "Values cannot differ by more than 25! Use the form to enter new values."
        );
        assert_eq!(ValidationError::Order.kind(), "order");
    }
}
