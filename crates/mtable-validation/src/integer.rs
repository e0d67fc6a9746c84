//! Presence and integer-format validation

use alloc::string::{String, ToString};

/// Validates that a (trimmed) value was supplied
pub fn validate_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required.".to_string())
    } else {
        Ok(())
    }
}

/// Integer format check: optional leading minus, then one or more ASCII digits.
///
/// With the `regex-validation` feature the check uses an anchored regex.
#[cfg(feature = "regex-validation")]
pub fn is_integer(value: &str) -> bool {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid")
    });

    INTEGER_REGEX.is_match(value)
}

#[cfg(not(feature = "regex-validation"))]
pub fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_integer(value: &str) -> Result<(), String> {
    if is_integer(value) {
        Ok(())
    } else {
        Err("Please enter an integer.".to_string())
    }
}

/// Parse an integer-formatted value. Text that fails the format check, or
/// does not fit in an `i64`, yields `None`.
pub fn parse_integer(value: &str) -> Option<i64> {
    if is_integer(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Parse an integer-formatted value, clamping text beyond the `i64` range to
/// `i64::MIN` or `i64::MAX` so range rules still apply to it.
pub fn parse_integer_saturating(value: &str) -> Option<i64> {
    if !is_integer(value) {
        return None;
    }
    Some(value.parse().unwrap_or(if value.starts_with('-') { i64::MIN } else { i64::MAX }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("1").is_ok());
        assert_eq!(validate_required("").unwrap_err(), "This field is required.");
        assert!(validate_required("   ").is_err());
    }

    #[test]
    fn test_integer_format() {
        assert!(is_integer("0"));
        assert!(is_integer("42"));
        assert!(is_integer("-17"));
        assert!(is_integer("007"));

        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("+5"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("12abc"));
        assert!(!is_integer("abc12"));
        assert!(!is_integer("1 2"));
        assert!(!is_integer("--1"));
    }

    #[test]
    fn test_validate_integer_message() {
        assert_eq!(validate_integer("x").unwrap_err(), "Please enter an integer.");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("-25"), Some(-25));
        assert_eq!(parse_integer("1000"), Some(1000));
        assert_eq!(parse_integer("3e2"), None);
        assert_eq!(parse_integer("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_integer_saturating() {
        assert_eq!(parse_integer_saturating("42"), Some(42));
        assert_eq!(parse_integer_saturating("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_integer_saturating("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_integer_saturating("1.5"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }
}
