//! End-to-end tests for the form rules over dynamic values.

use form_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn msg(result: Result<(), ValidationError>) -> String {
    result.unwrap_err().to_string()
}

// required: 0 is a value, false is not

#[rstest]
#[case(json!("text"), true)]
#[case(json!(0), true)]
#[case(json!(0.0), true)]
#[case(json!(true), true)]
#[case(json!({}), true)] // displays as "[object Object]"
#[case(json!([0]), true)]
#[case(Value::Null, false)]
#[case(json!(false), false)]
#[case(json!(""), false)]
#[case(json!(" \t "), false)]
#[case(json!([]), false)]
fn required_accepts_values_and_rejects_blanks(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(form::required(&value).is_ok(), ok, "value: {value}");
}

#[test]
fn required_message_is_exact() {
    assert_eq!(msg(form::required(&json!(""))), "This field is required");
}

// email: empty input gets its own message

#[test]
fn email_distinguishes_empty_from_malformed() {
    assert_eq!(msg(form::email(&Value::Null)), "Email is required");
    assert_eq!(msg(form::email(&json!(""))), "Email is required");
    assert_eq!(
        msg(form::email(&json!("user@nodomain"))),
        "The Email field must be a valid email address"
    );
}

#[rstest]
#[case("simple@example.com")]
#[case("dotted.name@example.com")]
#[case("user@[10.0.0.1]")]
#[case("\"odd local\"@example.org")]
fn email_accepts_valid_addresses(#[case] address: &str) {
    assert!(form::email(&json!(address)).is_ok(), "address: {address}");
}

// password: one message for every failure mode

#[rstest]
#[case("Abcdef1!", true)]
#[case("P@ssw0rd", true)]
#[case("short1A!", true)]
#[case("Aa1!Aa1", false)] // 7 chars
#[case("abcdefg1!", false)] // no uppercase
#[case("ABCDEFG1!", false)] // no lowercase
#[case("Abcdefgh!", false)] // no digit
#[case("Abcdefg12", false)] // no special
fn password_requires_all_character_classes(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(form::password(input).is_ok(), ok, "input: {input}");
}

#[test]
fn password_failure_message_never_names_the_missing_class() {
    let expected = "Password must be at least 8 characters, with uppercase, lowercase, number, and special characters.";
    assert_eq!(msg(form::password("")), expected);
    assert_eq!(msg(form::password("Abcdefg1")), expected);
}

// confirmed: strict equality

#[test]
fn confirmed_matches_identical_values_only() {
    assert!(form::confirmed(&json!("Secret1!"), &json!("Secret1!")).is_ok());
    assert_eq!(
        msg(form::confirmed(&json!("Secret1!"), &json!("secret1!"))),
        "Passwords do not match."
    );
    // No coercion across types, but numbers compare by value.
    assert!(form::confirmed(&json!(1), &json!("1")).is_err());
    assert!(form::confirmed(&json!(1), &json!(1.0)).is_ok());
}

// between: loose numeric coercion, NaN never passes

#[rstest]
#[case(json!(5), true)]
#[case(json!("5"), true)]
#[case(json!(" 5 "), true)]
#[case(json!(1), true)]
#[case(json!(10), true)]
#[case(json!(0), false)]
#[case(json!(11), false)]
#[case(json!("five"), false)]
#[case(json!({}), false)]
#[case(json!([3, 4]), false)]
fn between_coerces_then_compares(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(form::between(&value, 1.0, 10.0).is_ok(), ok, "value: {value}");
}

#[test]
fn between_message_includes_bounds() {
    assert_eq!(
        msg(form::between(&json!(99), 1.0, 10.0)),
        "Enter number between 1 and 10"
    );
}

// integer: vacuous on empty, element-wise over arrays

#[rstest]
#[case(Value::Null, true)]
#[case(json!(""), true)]
#[case(json!([]), true)]
#[case(json!("123"), true)]
#[case(json!("-5"), true)]
#[case(json!(7), true)]
#[case(json!(["1", "22", "-3"]), true)]
#[case(json!([1, 2, 3]), true)]
#[case(json!(["1", "2.5"]), false)]
#[case(json!("1.5"), false)]
#[case(json!("ten"), false)]
fn integer_checks_every_element(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(form::integer(&value).is_ok(), ok, "value: {value}");
}

// regex: recursion through nested arrays, bad pattern is a distinct error

#[test]
fn regex_str_walks_nested_arrays() {
    let value = json!(["abc", ["def", ["ghi"]]]);
    assert!(form::regex_str(&value, "^[a-z]+$").is_ok());

    let value = json!(["abc", ["def", ["GHI"]]]);
    let err = form::regex_str(&value, "^[a-z]+$").unwrap_err();
    match err {
        form::RegexRuleError::Failed(e) => {
            assert_eq!(e.to_string(), "The input doesn't match the expected format");
        }
        form::RegexRuleError::BadPattern(_) => panic!("expected a validation failure"),
    }
}

#[test]
fn regex_str_propagates_compile_errors() {
    let err = form::regex_str(&json!("anything"), "(unclosed").unwrap_err();
    assert!(matches!(err, form::RegexRuleError::BadPattern(_)));
}

#[test]
fn regex_coerces_non_strings() {
    let re = regex::Regex::new("^[0-9]+$").unwrap();
    assert!(form::regex(&json!(12345), &re).is_ok());
}

#[test]
fn regex_array_failure_carries_the_failing_index() {
    let re = regex::Regex::new("^[a-z]+$").unwrap();
    let err = form::regex(&json!(["ok", "ok", "NOPE"]), &re).unwrap_err();
    assert_eq!(err.param("index"), Some("2"));
}

// alpha / alpha_dash / url / min_length: vacuous pass on empty

#[rstest]
#[case(json!(""))]
#[case(Value::Null)]
#[case(json!([]))]
fn character_class_rules_pass_on_empty(#[case] value: Value) {
    assert!(form::alpha(&value).is_ok());
    assert!(form::alpha_dash(&value).is_ok());
    assert!(form::url(&value).is_ok());
    assert!(form::min_length(&value, 100).is_ok());
}

#[test]
fn alpha_message_names_the_alpha_field() {
    assert_eq!(
        msg(form::alpha(&json!("letters123"))),
        "The Alpha field may only contain alphabetic characters"
    );
}

#[test]
fn alpha_dash_message_is_exact() {
    assert_eq!(
        msg(form::alpha_dash(&json!("no spaces allowed"))),
        "The input must be alphanumeric and can only include dashes (-) and underscores (_)."
    );
}

#[rstest]
#[case("https://example.com/path?q=1", true)]
#[case("http://www.example.io", true)]
#[case("sub.domain.example.org", true)]
#[case("definitely not a url", false)]
fn url_accepts_permissive_shapes(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(form::url(&json!(input)).is_ok(), ok, "input: {input}");
}

#[test]
fn min_length_counts_display_characters() {
    assert!(form::min_length(&json!("abcde"), 5).is_ok());
    assert!(form::min_length(&json!(12345), 5).is_ok());
    assert_eq!(
        msg(form::min_length(&json!("abcd"), 5)),
        "The Min Character field must be at least 5 characters"
    );
}

// image: first file only, 2 MB limit

#[rstest]
#[case(json!([{"name": "a.png", "size": 500_000}]), true)]
#[case(json!([{"name": "a.png", "size": 1_999_999}]), true)]
#[case(json!([{"name": "a.png", "size": 2_000_000}]), false)]
#[case(json!([{"name": "a.png"}]), false)]
#[case(json!([]), true)]
#[case(Value::Null, true)]
#[case(json!(123), true)]
#[case(json!({"size": 1}), true)]
#[case(json!("no files"), false)] // strings index to sizeless characters
fn image_enforces_two_megabytes(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(form::image(&value).is_ok(), ok, "value: {value}");
}

#[test]
fn image_message_is_exact() {
    assert_eq!(
        msg(form::image(&json!([{"size": 5_000_000}]))),
        "Image size should be less than 2 MB"
    );
}

// errors serialize for the UI

#[test]
fn rule_errors_serialize_with_code_and_message() {
    let err = form::required(&Value::Null).unwrap_err();
    let payload = serde_json::to_value(&err).unwrap();
    assert_eq!(payload["message"], "This field is required");
    assert!(payload.get("code").is_some());
}

// whole-form collection

#[test]
fn validate_with_all_reports_every_failing_field() {
    let not_blank = not_empty();
    let checks: &[&dyn Validate<Input = str>] = &[&not_blank];
    assert!(validate_with_all("", checks).is_err());

    let mut errors = ValidationErrors::new();
    for (field, result) in [
        ("email", form::email(&json!(""))),
        ("password", form::password("weak")),
        ("age", form::between(&json!("200"), 0.0, 130.0)),
    ] {
        if let Err(e) = result {
            errors.add(e.with_field(field));
        }
    }
    assert_eq!(errors.len(), 3);
    let rendered = errors.to_string();
    assert!(rendered.contains("[email] Email is required"));
    assert!(rendered.contains("[age] Enter number between 0 and 130"));
}
