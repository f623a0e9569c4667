//! Numeric range validators
//!
//! Generic over any ordered, displayable, copyable type. Forms use these
//! with `f64` after coercing text input.

use crate::foundation::ValidationError;
use std::fmt::Display;

validator! {
    /// Validates that a value is at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

validator! {
    /// Validates that a value is at most `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

validator! {
    /// Validates that a value lies in the inclusive range `[min, max]`.
    ///
    /// NaN input fails both bound checks, so it is always rejected for
    /// floating point types.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::out_of_range(self.min, self.max, *input)
    }
    fn in_range(min: T, max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min() {
        let v = min(5_i64);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&4).is_err());
    }

    #[test]
    fn test_max() {
        let v = max(10.0_f64);
        assert!(v.validate(&10.0).is_ok());
        assert!(v.validate(&10.5).is_err());
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        let v = in_range(1.0, 10.0);
        assert!(v.validate(&1.0).is_ok());
        assert!(v.validate(&10.0).is_ok());
        assert!(v.validate(&0.999).is_err());
        assert!(v.validate(&10.001).is_err());
    }

    #[test]
    fn test_in_range_rejects_nan() {
        let v = in_range(0.0, 100.0);
        assert!(v.validate(&f64::NAN).is_err());
    }

    #[test]
    fn test_in_range_error_params() {
        let err = in_range(1, 10).validate(&42).unwrap_err();
        assert_eq!(err.code, "out_of_range");
        assert_eq!(err.param("min"), Some("1"));
        assert_eq!(err.param("max"), Some("10"));
        assert_eq!(err.param("actual"), Some("42"));
    }
}
