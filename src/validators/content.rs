//! Content format validators (email, URL, arbitrary patterns)

use crate::foundation::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Email pattern: local part (dotted atoms or a quoted string) followed by
/// a domain (dotted labels with a 2+ letter TLD, or a bracketed IPv4).
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

/// URL pattern: optional scheme and www, a dotted host, a 2-5 letter TLD.
///
/// Anchored only at the start, so a valid prefix is enough. "example.com
/// and some garbage" passes. Tightening this would reject previously
/// accepted input, so the leniency is kept.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,5}\.?").unwrap()
});

validator! {
    /// Validates email address format.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("email", "The Email field must be a valid email address")
    }
    fn email();
}

validator! {
    /// Validates URL format.
    ///
    /// The empty string passes; require a value separately with
    /// [`NotEmpty`](crate::validators::length::NotEmpty) when needed.
    pub Url for str;
    rule(input) { input.is_empty() || URL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("url", "URL is invalid")
    }
    fn url();
}

validator! {
    /// Validates a string against an arbitrary regular expression.
    ///
    /// Construction fails with [`regex::Error`] if the pattern does not
    /// compile.
    pub MatchesRegex { regex: Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) {
        ValidationError::new("regex", "The input doesn't match the expected format")
            .with_param("pattern", self.regex.to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { regex: Regex::new(pattern)? })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Wraps an already-compiled regex.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }
}
