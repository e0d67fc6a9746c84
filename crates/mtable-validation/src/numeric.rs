//! Numeric validation functions

use alloc::format;
use alloc::string::{String, ToString};

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + core::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Please enter a value greater than or equal to {}.", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + core::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Please enter a value less than or equal to {}.", max))
    }
}

/// Validates that an end bound is not below its start bound
pub fn validate_greater_equal(value: i64, start: i64) -> Result<(), String> {
    if value >= start {
        Ok(())
    } else {
        Err("The end value cannot be less than the start value.".to_string())
    }
}

/// Validates that two bounds are at most `threshold` apart
pub fn validate_delta(value: i64, other: i64, threshold: u64) -> Result<(), String> {
    if value.abs_diff(other) <= threshold {
        Ok(())
    } else {
        Err(format!(
            "The start and end values cannot differ by more than {}.",
            threshold
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_validation() {
        assert!(validate_min(10, 5).is_ok());
        assert!(validate_min(5, 5).is_ok());
        assert!(validate_min(3, 5).is_err());
        assert!(validate_min(-100, -100).is_ok());
        assert_eq!(
            validate_min(-101, -100).unwrap_err(),
            "Please enter a value greater than or equal to -100."
        );
    }

    #[test]
    fn test_max_validation() {
        assert!(validate_max(5, 10).is_ok());
        assert!(validate_max(10, 10).is_ok());
        assert_eq!(
            validate_max(101, 100).unwrap_err(),
            "Please enter a value less than or equal to 100."
        );
    }

    #[test]
    fn test_greater_equal() {
        assert!(validate_greater_equal(3, 1).is_ok());
        assert!(validate_greater_equal(1, 1).is_ok());
        assert_eq!(
            validate_greater_equal(0, 1).unwrap_err(),
            "The end value cannot be less than the start value."
        );
    }

    #[test]
    fn test_delta() {
        assert!(validate_delta(26, 1, 25).is_ok());
        assert!(validate_delta(1, 26, 25).is_ok());
        assert!(validate_delta(-12, 13, 25).is_ok());
        assert_eq!(
            validate_delta(27, 1, 25).unwrap_err(),
            "The start and end values cannot differ by more than 25."
        );
        // order does not matter
        assert!(validate_delta(1, 27, 25).is_err());
    }

    #[test]
    fn test_delta_extremes_do_not_overflow() {
        assert!(validate_delta(i64::MAX, i64::MIN, 25).is_err());
    }
}
