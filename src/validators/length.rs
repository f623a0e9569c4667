//! String length validators

use crate::foundation::ValidationError;

validator! {
    /// Validates that a string is not empty (and not whitespace-only).
    pub NotEmpty for str;
    rule(input) { !input.trim().is_empty() }
    error(input) {
        ValidationError::new("not_empty", "This field is required")
    }
    fn not_empty();
}

validator! {
    /// Validates that a string has at least `min` characters.
    ///
    /// Length is counted in `char`s, not bytes, so multibyte input is not
    /// penalized.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        ValidationError::min_length(self.min, input.chars().count())
    }
    fn min_length(min: usize);
}

validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        ValidationError::new(
            "max_length",
            format!("Must be at most {} characters", self.max),
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn max_length(max: usize);
}
