//! Form field rules
//!
//! Each rule is a pure function from a dynamic [`Value`] (plus any
//! parameters) to `Result<(), ValidationError>`, carrying the exact
//! message the form UI displays. `Ok(())` is the single success tag;
//! every failure is a displayable error.
//!
//! Most rules pass vacuously on empty input (`Null`, `""`, `[]`):
//! requiring a value is [`required`]'s job, so optional fields only
//! validate once the user has typed something. [`email`] is the
//! exception and carries its own required message.

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::combinators::each;
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::rules::value::{
    as_number, display_string, is_empty, is_empty_array, is_null_or_undefined,
};
use crate::validators::{self, MatchesRegex};

/// Adapts a string validator to a dynamic value by display coercion.
///
/// This is what lets the element-wise rules ride the
/// [`Each`](crate::combinators::Each) combinator: an array of values
/// becomes a slice whose elements are coerced and validated one by one.
#[derive(Debug, Clone)]
struct Coerced<V> {
    inner: V,
}

impl<V> Validate for Coerced<V>
where
    V: Validate<Input = str>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        self.inner.validate(&display_string(input))
    }
}

/// Pattern matching over a dynamic value: empty passes, arrays recurse
/// element-wise through [`each`], scalars are coerced and matched.
#[derive(Debug, Clone)]
struct ValuePattern {
    matcher: MatchesRegex,
}

impl Validate for ValuePattern {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if is_empty(input) {
            return Ok(());
        }
        if let Value::Array(items) = input {
            return each(self.clone()).validate(items);
        }
        self.matcher.validate(&display_string(input))
    }
}

/// Error from [`regex_str`]: either the pattern failed to compile or the
/// input failed to match. A bad pattern is a programming error and is
/// kept distinct from a validation failure.
#[derive(Debug, thiserror::Error)]
pub enum RegexRuleError {
    #[error(transparent)]
    BadPattern(#[from] regex::Error),
    #[error(transparent)]
    Failed(#[from] ValidationError),
}

/// Requires a non-empty value.
///
/// `Null`, `false`, empty arrays, and strings that are empty after
/// trimming all fail. `0` passes (its display form `"0"` is non-empty).
pub fn required(value: &Value) -> Result<(), ValidationError> {
    if is_null_or_undefined(value) || is_empty_array(value) || *value == Value::Bool(false) {
        return Err(ValidationError::new("required", "This field is required"));
    }
    validators::not_empty().validate(&display_string(value))
}

/// Requires a well-formed email address.
///
/// Empty input fails with its own required message instead of passing
/// vacuously.
pub fn email(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Err(ValidationError::new("email_required", "Email is required"));
    }
    validators::email().validate(&display_string(value))
}

/// Requires a strong password: at least 8 characters with uppercase,
/// lowercase, digit, and special character.
///
/// Logs the outcome at debug level with the password masked; the
/// cleartext never reaches the log.
pub fn password(value: &str) -> Result<(), ValidationError> {
    let result = validators::password().validate(value);
    let masked = "*".repeat(value.chars().count());
    debug!(password = %masked, valid = result.is_ok(), "password validated");
    result
}

/// Requires the value to equal the target (password confirmation).
///
/// No coercion across types: `1` does not match `"1"`. Numbers compare
/// by numeric value, so integer and float forms of the same number
/// match.
pub fn confirmed(value: &Value, target: &Value) -> Result<(), ValidationError> {
    let matches = match (value, target) {
        (Value::Number(a), Value::Number(b)) => {
            a.as_f64().zip(b.as_f64()).is_some_and(|(a, b)| a == b)
        }
        _ => value == target,
    };
    if matches {
        Ok(())
    } else {
        Err(ValidationError::new("confirmed", "Passwords do not match."))
    }
}

/// Requires the numeric form of the value to lie in `[min, max]`.
///
/// The value is coerced through [`as_number`]; anything non-numeric
/// becomes NaN and is never in range. There is no vacuous pass here:
/// `Null` coerces to `0`, which may or may not be in range.
pub fn between(value: &Value, min: f64, max: f64) -> Result<(), ValidationError> {
    validators::in_range(min, max)
        .with_message(format!("Enter number between {min} and {max}"))
        .validate(&as_number(value))
}

/// Requires the value to read as an optionally-signed decimal integer.
///
/// Arrays are checked element-wise (all must pass, first failure wins).
/// Empty input passes vacuously.
pub fn integer(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    if let Value::Array(items) = value {
        return each(Coerced {
            inner: validators::integer_text(),
        })
        .validate(items);
    }
    validators::integer_text().validate(&display_string(value))
}

/// Requires the value to match a compiled pattern.
///
/// Arrays recurse element-wise (nested arrays and empty elements follow
/// the same rules). Empty input passes vacuously.
pub fn regex(value: &Value, re: &Regex) -> Result<(), ValidationError> {
    ValuePattern {
        matcher: MatchesRegex::from_regex(re.clone()),
    }
    .validate(value)
}

/// Like [`regex`], but compiles the pattern first.
///
/// A pattern that does not compile surfaces as
/// [`RegexRuleError::BadPattern`] rather than a validation failure.
pub fn regex_str(value: &Value, pattern: &str) -> Result<(), RegexRuleError> {
    let matcher = MatchesRegex::new(pattern)?;
    ValuePattern { matcher }.validate(value)?;
    Ok(())
}

/// Requires the value to contain only ASCII letters.
///
/// Empty input passes vacuously.
pub fn alpha(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    validators::alphabetic().validate(&display_string(value))
}

/// Requires the value to look like a URL.
///
/// The pattern is anchored only at the start; see
/// [`Url`](crate::validators::Url) for the accepted shape. Empty input
/// passes vacuously.
pub fn url(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    validators::url().validate(&display_string(value))
}

/// Requires the display form of the value to have at least `min`
/// characters.
///
/// Empty input passes vacuously.
pub fn min_length(value: &Value, min: usize) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    validators::min_length(min)
        .with_message(format!(
            "The Min Character field must be at least {min} characters"
        ))
        .validate(&display_string(value))
}

/// Requires the value to contain only ASCII letters, digits, dashes,
/// and underscores.
///
/// Empty input passes vacuously.
pub fn alpha_dash(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    validators::alpha_dash().validate(&display_string(value))
}

/// Requires an uploaded image (file-list-like array) to be under 2 MB.
///
/// Values without indexable elements (numbers, booleans, objects) pass.
/// Anything indexable is treated as a file list: its first element must
/// be an object whose `size` member is a number below 2,000,000. A
/// missing or non-numeric `size` fails, since NaN is never below the
/// limit; a non-empty string indexes to characters, which carry no
/// `size`, so it fails too.
pub fn image(value: &Value) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Ok(());
    }
    let size = match value {
        Value::Array(items) => match items.first() {
            Some(Value::Object(file)) => file.get("size").map_or(f64::NAN, as_number),
            _ => f64::NAN,
        },
        Value::String(_) => f64::NAN,
        _ => return Ok(()),
    };
    if size < 2_000_000.0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "image_size",
            "Image size should be less than 2 MB",
        ))
    }
}
