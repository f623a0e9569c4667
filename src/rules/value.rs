//! Emptiness predicates and loose coercions for dynamic values
//!
//! Form inputs arrive as loosely-typed [`Value`]s: a text field yields a
//! string, a number input may yield a string or a number, a file input
//! yields an array of objects. The rules in [`form`](super::form) first
//! coerce through these helpers, which mirror how a dynamically-typed
//! frontend stringifies and numifies values.

use serde_json::Value;
use std::borrow::Cow;

/// Returns true for `Null`, the empty string, or an empty array.
///
/// Whitespace-only strings are NOT empty here; `0` and `false` are not
/// empty either.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

/// Returns true for `Null` (absent values carry no other representation).
#[must_use]
pub fn is_null_or_undefined(value: &Value) -> bool {
    value.is_null()
}

/// Returns true for an array with no elements.
#[must_use]
pub fn is_empty_array(value: &Value) -> bool {
    matches!(value, Value::Array(a) if a.is_empty())
}

/// Returns true for an object (maps only, arrays excluded).
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Coerces a value to its display string.
///
/// - strings pass through unchanged (borrowed, no allocation)
/// - integral numbers drop the fraction (`1.0` becomes `"1"`)
/// - booleans become `"true"` / `"false"`
/// - arrays join their elements with commas, with `Null` elements
///   rendering as nothing (`[1, null, 2]` becomes `"1,,2"`)
/// - objects become `"[object Object]"`
/// - `Null` becomes the empty string
#[must_use]
pub fn display_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(number_string(n)),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| display_string(item).into_owned())
                .collect();
            Cow::Owned(parts.join(","))
        }
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let f = n.as_f64().unwrap_or(f64::NAN);
    // Integral floats render without the fraction, like 1.0 -> "1".
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Coerces a value to a number the way a loose numeric context does.
///
/// - `Null` is `0`, booleans are `1` / `0`
/// - strings are trimmed and parsed; the empty (or blank) string is `0`,
///   anything unparseable is NaN
/// - an empty array is `0`, a one-element array coerces its element,
///   longer arrays are NaN
/// - objects are NaN
///
/// NaN fails every ordered comparison, so "never in range" falls out of
/// the arithmetic.
#[must_use]
pub fn as_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => as_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}
