//! Convenient single import for the common surface
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let username = min_length(3).and(alpha_dash());
//! assert!(username.validate("jane_doe").is_ok());
//!
//! form::required(&serde_json::json!("hello"))?;
//! ```

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult, validate_with_all,
    validate_with_any,
};

pub use crate::combinators::{And, Each, Not, Optional, Or, WithMessage, each};

pub use crate::validators::{
    AlphaDash, Alphabetic, Email, Equals, InRange, IntegerText, MatchesRegex, Max, MaxLength, Min,
    MinLength, NotEmpty, Password, SPECIAL_CHARS, Url, alpha_dash, alphabetic, email, equals,
    in_range, integer_text, matches_regex, max, max_length, min, min_length, not_empty, password,
    url,
};

pub use crate::rules::{self, form};

pub use crate::debounce::{DebounceError, DebouncedPassword, Debouncer, PASSWORD_DEBOUNCE};

pub use crate::{any_of, compose, validator};
