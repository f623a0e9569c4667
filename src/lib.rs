//! # form-validator
//!
//! Composable validation for HTML form inputs: a typed validator core, a
//! loosely-typed rules layer matching what form fields actually produce,
//! and a debounce scheduler for keystroke-driven validation.
//!
//! ## Layers
//!
//! - [`foundation`] - the [`Validate`](foundation::Validate) trait and
//!   structured [`ValidationError`](foundation::ValidationError)
//! - [`combinators`] - `and` / `or` / `not` / `each` / `optional` /
//!   `with_message` composition
//! - [`validators`] - typed validators over `str` and numbers (length,
//!   character classes, email, URL, password strength, ranges)
//! - [`rules`] - form field rules over dynamic `serde_json::Value`s,
//!   with display-ready messages
//! - [`debounce`] - collapse bursts of calls so only the last input is
//!   evaluated
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//! use serde_json::json;
//!
//! // Typed core
//! let username = min_length(3).and(alpha_dash());
//! assert!(username.validate("jane_doe").is_ok());
//!
//! // Form rules
//! assert!(form::required(&json!("hello")).is_ok());
//! assert_eq!(
//!     form::email(&json!("nope")).unwrap_err().to_string(),
//!     "The Email field must be a valid email address",
//! );
//!
//! // Declare your own validator
//! validator! {
//!     pub StartsUpper for str;
//!     rule(input) { input.chars().next().is_some_and(char::is_uppercase) }
//!     error(input) { ValidationError::new("starts_upper", "Must start uppercase") }
//!     fn starts_upper();
//! }
//! ```

#[macro_use]
pub mod macros;

pub mod combinators;
pub mod debounce;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use foundation::{Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult};
