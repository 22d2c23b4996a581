//! Field-level checks over a raw JSON object
//!
//! Every check records its failure and returns `None`, so callers can run all
//! checks before deciding whether the input is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::{FieldError, ValidationErrors};
use crate::domain::Choice;

pub(crate) const REQUIRED: &str = "Required";

/// Same address grammar as zod's `z.string().email()`, which the web form
/// validates with, so the server accepts exactly what the form accepts. Do not
/// swap in the `validator` crate: it accepts a different set of addresses
/// (quoted local parts, IP-literal domains, single-label hosts).
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("valid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

pub(crate) const INVALID_EMAIL: &str = "Please enter a valid email address";
pub(crate) const INVALID_PHONE: &str = "Please enter a 10-digit phone number";

/// Name of a JSON value's type, as reported in type mismatch messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The leading-dot and double-dot checks are zod's lookaheads, which the
/// `regex` crate does not support.
pub(crate) fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

pub(crate) fn is_phone_number(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Insert `default` under `field` when the key is absent
pub(crate) fn default_to(fields: &mut Map<String, Value>, field: &str, default: impl Choice) {
    fields
        .entry(field)
        .or_insert_with(|| Value::String(default.as_str().to_string()));
}

/// Reject anything that is not a JSON object with a single root error
pub(crate) fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    input.as_object().ok_or_else(|| {
        ValidationErrors::single(
            "",
            format!("Expected object, received {}", type_name(input)),
        )
    })
}

/// Collects field errors while reading values out of a JSON object
pub(crate) struct FieldChecker<'a> {
    fields: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldChecker<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            errors: Vec::new(),
        }
    }

    fn fail<T>(&mut self, field: &str, message: impl Into<String>) -> Option<T> {
        self.errors.push(FieldError::new(field, message));
        None
    }

    fn required_str(&mut self, field: &str) -> Option<&'a str> {
        match self.fields.get(field) {
            None => self.fail(field, REQUIRED),
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => self.fail(
                field,
                format!("Expected string, received {}", type_name(other)),
            ),
        }
    }

    /// `Some(None)` when the key is absent, `None` when the value is invalid
    fn optional_str(&mut self, field: &str) -> Option<Option<&'a str>> {
        match self.fields.get(field) {
            None => Some(None),
            Some(Value::String(s)) => Some(Some(s.as_str())),
            Some(other) => self.fail(
                field,
                format!("Expected string, received {}", type_name(other)),
            ),
        }
    }

    fn min_chars(&mut self, field: &str, value: &str, min: usize, message: &str) -> Option<String> {
        if value.chars().count() < min {
            return self.fail(field, message);
        }
        Some(value.to_string())
    }

    /// Required text of at least `min` characters
    pub fn text(&mut self, field: &str, min: usize, message: &str) -> Option<String> {
        let value = self.required_str(field)?;
        self.min_chars(field, value, min, message)
    }

    /// Optional free text without further constraints
    pub fn optional_text(&mut self, field: &str) -> Option<Option<String>> {
        self.optional_str(field)
            .map(|value| value.map(str::to_string))
    }

    pub fn email(&mut self, field: &str) -> Option<String> {
        let value = self.required_str(field)?;
        if !is_email(value) {
            return self.fail(field, INVALID_EMAIL);
        }
        Some(value.to_string())
    }

    /// Exactly ten digits. Formatting characters are rejected, not stripped.
    pub fn phone(&mut self, field: &str) -> Option<String> {
        let value = self.required_str(field)?;
        if !is_phone_number(value) {
            return self.fail(field, INVALID_PHONE);
        }
        Some(value.to_string())
    }

    pub fn optional_phone(&mut self, field: &str) -> Option<Option<String>> {
        match self.optional_str(field)? {
            None => Some(None),
            Some(value) if is_phone_number(value) => Some(Some(value.to_string())),
            Some(_) => self.fail(field, INVALID_PHONE),
        }
    }

    /// One of the values of `T`
    pub fn choice<T: Choice>(&mut self, field: &str) -> Option<T> {
        let expected = T::ALL
            .iter()
            .map(|choice| format!("'{}'", choice.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");

        match self.fields.get(field) {
            None => self.fail(field, REQUIRED),
            Some(Value::String(s)) => match T::parse(s) {
                Some(choice) => Some(choice),
                None => self.fail(
                    field,
                    format!("Invalid enum value. Expected {}, received '{}'", expected, s),
                ),
            },
            Some(other) => self.fail(
                field,
                format!("Expected {}, received {}", expected, type_name(other)),
            ),
        }
    }

    /// Optional list of strings; absent means empty. Duplicates are dropped,
    /// keeping the first occurrence.
    pub fn string_set(&mut self, field: &str) -> Option<Vec<String>> {
        let items = match self.fields.get(field) {
            None => return Some(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return self.fail(
                    field,
                    format!("Expected array, received {}", type_name(other)),
                )
            }
        };

        let mut values: Vec<String> = Vec::with_capacity(items.len());
        let mut valid = true;

        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => {
                    if !values.contains(s) {
                        values.push(s.clone());
                    }
                }
                other => {
                    valid = false;
                    self.errors.push(FieldError::new(
                        format!("{}.{}", field, index),
                        format!("Expected string, received {}", type_name(other)),
                    ));
                }
            }
        }

        valid.then_some(values)
    }

    /// All errors recorded so far. Only call after at least one check failed.
    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors::from(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceType;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_email("john@example.com"));
        assert!(is_email("first.last+tag@mail.example.co"));
        assert!(is_email("o'brien@example.ie"));
        assert!(!is_email("john@"));
        assert!(!is_email("john.example.com"));
        assert!(!is_email(".john@example.com"));
        assert!(!is_email("john..smith@example.com"));
        assert!(!is_email("john@example.c"));
        assert!(!is_email("john@-example.com"));
        assert!(!is_email("john smith@example.com"));
    }

    #[test]
    fn test_email_rejects_forms_the_web_form_rejects() {
        assert!(!is_email("\"john smith\"@example.com"));
        assert!(!is_email("john@[192.168.0.1]"));
        assert!(!is_email("john@localhost"));
    }

    #[test]
    fn test_phone_requires_exactly_ten_ascii_digits() {
        assert!(is_phone_number("9191234567"));
        assert!(!is_phone_number("123"));
        assert!(!is_phone_number("91912345678"));
        assert!(!is_phone_number("(919) 123-4567"));
        assert!(!is_phone_number("٩١٩١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_text_reports_missing_type_and_length() {
        let fields = object(json!({ "short": "a", "number": 42, "ok": "Jane" }));
        let mut checker = FieldChecker::new(&fields);

        assert_eq!(checker.text("missing", 2, "too short"), None);
        assert_eq!(checker.text("number", 2, "too short"), None);
        assert_eq!(checker.text("short", 2, "too short"), None);
        assert_eq!(checker.text("ok", 2, "too short"), Some("Jane".to_string()));

        let errors = checker.into_errors();
        assert_eq!(errors.message_for("missing"), Some(REQUIRED));
        assert_eq!(
            errors.message_for("number"),
            Some("Expected string, received number")
        );
        assert_eq!(errors.message_for("short"), Some("too short"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_min_length_counts_characters() {
        let fields = object(json!({ "name": "Zoë" }));
        let mut checker = FieldChecker::new(&fields);

        assert_eq!(checker.text("name", 3, "too short"), Some("Zoë".to_string()));
    }

    #[test]
    fn test_choice_messages() {
        let fields = object(json!({ "a": "deluxe", "b": 3, "c": "premium" }));
        let mut checker = FieldChecker::new(&fields);

        assert_eq!(checker.choice::<ServiceType>("a"), None);
        assert_eq!(checker.choice::<ServiceType>("b"), None);
        assert_eq!(
            checker.choice::<ServiceType>("c"),
            Some(ServiceType::Premium)
        );

        let errors = checker.into_errors();
        assert_eq!(
            errors.message_for("a"),
            Some("Invalid enum value. Expected 'basic' | 'premium' | 'custom', received 'deluxe'")
        );
        assert_eq!(
            errors.message_for("b"),
            Some("Expected 'basic' | 'premium' | 'custom', received number")
        );
    }

    #[test]
    fn test_string_set() {
        let fields = object(json!({
            "ids": ["edging", "mulching", "edging"],
            "mixed": ["edging", 7],
            "scalar": "edging",
        }));
        let mut checker = FieldChecker::new(&fields);

        assert_eq!(
            checker.string_set("ids"),
            Some(vec!["edging".to_string(), "mulching".to_string()])
        );
        assert_eq!(checker.string_set("absent"), Some(vec![]));
        assert_eq!(checker.string_set("mixed"), None);
        assert_eq!(checker.string_set("scalar"), None);

        let errors = checker.into_errors();
        assert_eq!(
            errors.message_for("mixed.1"),
            Some("Expected string, received number")
        );
        assert_eq!(
            errors.message_for("scalar"),
            Some("Expected array, received string")
        );
    }

    #[test]
    fn test_default_to_only_fills_absent_keys() {
        let mut fields = object(json!({ "serviceType": "premium", "other": null }));

        default_to(&mut fields, "serviceType", ServiceType::Basic);
        default_to(&mut fields, "other", ServiceType::Basic);
        default_to(&mut fields, "missing", ServiceType::Basic);

        assert_eq!(fields["serviceType"], json!("premium"));
        assert_eq!(fields["other"], Value::Null);
        assert_eq!(fields["missing"], json!("basic"));
    }

    #[test]
    fn test_non_object_input() {
        let errors = as_object(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.message_for(""), Some("Expected object, received array"));
    }
}
