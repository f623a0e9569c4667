//! Character-class validators
//!
//! These check membership in simple ASCII character classes. They pass
//! vacuously on the empty string; emptiness is a separate concern handled
//! by [`NotEmpty`](crate::validators::length::NotEmpty).

use crate::foundation::ValidationError;

validator! {
    /// Validates that every character is an ASCII letter.
    ///
    /// Equivalent to matching `^[a-zA-Z]*$`. The empty string passes.
    pub Alphabetic for str;
    rule(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
    error(input) {
        ValidationError::new(
            "alpha",
            "The Alpha field may only contain alphabetic characters",
        )
    }
    fn alphabetic();
}

validator! {
    /// Validates that every character is an ASCII letter, digit, dash,
    /// or underscore.
    ///
    /// Equivalent to matching `^[a-zA-Z0-9_-]*$`. The empty string passes.
    pub AlphaDash for str;
    rule(input) {
        input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
    error(input) {
        ValidationError::new(
            "alpha_dash",
            "The input must be alphanumeric and can only include dashes (-) and underscores (_).",
        )
    }
    fn alpha_dash();
}

validator! {
    /// Validates that a string is an optionally-signed decimal integer.
    ///
    /// Equivalent to matching `^-?[0-9]+$`. A lone `-` and the empty
    /// string both fail: at least one digit is required.
    pub IntegerText for str;
    rule(input) {
        let digits = input.strip_prefix('-').unwrap_or(input);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    }
    error(input) {
        ValidationError::new("integer", "This field must be a number")
    }
    fn integer_text();
}
