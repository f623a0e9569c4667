//! Form-facing validation rules over dynamic values
//!
//! This layer adapts the typed validators in
//! [`validators`](crate::validators) to the loosely-typed values a form
//! actually produces. [`value`] holds the emptiness predicates and
//! coercions; [`form`] holds the field rules themselves.
//!
//! ```rust,ignore
//! use form_validator::rules::form;
//! use serde_json::json;
//!
//! form::required(&json!("hello"))?;
//! form::email(&json!("user@example.com"))?;
//! form::between(&json!("7"), 1.0, 10.0)?;
//! ```

pub mod form;
pub mod value;

pub use form::{
    RegexRuleError, alpha, alpha_dash, between, confirmed, email, image, integer, min_length,
    password, regex, regex_str, required, url,
};
pub use value::{as_number, display_string, is_empty, is_empty_array, is_null_or_undefined, is_object};
