//! Password strength validator
//!
//! The classic lookahead pattern (at least one lowercase, one uppercase,
//! one digit, one special character, eight characters total) is expressed
//! as explicit character scans, since the `regex` crate does not support
//! lookahead.

use crate::foundation::ValidationError;

/// Special characters accepted by [`Password`].
pub const SPECIAL_CHARS: &str = "!@#$%&*()_";

const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters, with uppercase, lowercase, number, and special characters.";

validator! {
    /// Validates password strength.
    ///
    /// Requires at least 8 characters including one lowercase letter, one
    /// uppercase letter, one digit, and one special character from
    /// [`SPECIAL_CHARS`]. A single message covers every failure mode so
    /// the UI never reveals which requirement was missed.
    pub Password for str;
    rule(input) {
        input.chars().count() >= 8
            && input.chars().any(|c| c.is_ascii_lowercase())
            && input.chars().any(|c| c.is_ascii_uppercase())
            && input.chars().any(|c| c.is_ascii_digit())
            && input.chars().any(|c| SPECIAL_CHARS.contains(c))
    }
    error(input) {
        ValidationError::new("password", PASSWORD_MESSAGE)
    }
    fn password();
}

validator! {
    /// Validates that a string equals an expected value.
    ///
    /// Used for password confirmation fields.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals { expected: String } for str;
    rule(self, input) { input == self.expected }
    error(self, input) {
        ValidationError::new("equals", "Passwords do not match.")
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equals(expected: impl Into<String>);
}
