//! Typed validators for strings and numbers
//!
//! Each validator is a small struct implementing
//! [`Validate`](crate::foundation::Validate) over a concrete input type,
//! declared with the [`validator!`](crate::validator) macro and paired
//! with a snake_case factory function:
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let username = min_length(3).and(alpha_dash());
//! assert!(username.validate("jane_doe").is_ok());
//! ```
//!
//! The character-class validators pass vacuously on the empty string;
//! combine with [`not_empty`](length::not_empty) to also require a value.

pub mod content;
pub mod length;
pub mod password;
pub mod pattern;
pub mod range;

pub use content::{Email, MatchesRegex, Url, email, matches_regex, url};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use password::{Equals, Password, SPECIAL_CHARS, equals, password};
pub use pattern::{AlphaDash, Alphabetic, IntegerText, alpha_dash, alphabetic, integer_text};
pub use range::{InRange, Max, Min, in_range, max, min};
